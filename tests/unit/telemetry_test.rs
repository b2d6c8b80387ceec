// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dice_roll::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_idempotent() {
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    // 测试结构化日志
    tracing::info!(count = 3, groups = 1, "Rolling payload");
    tracing::warn!(error = "Count must be between 0 and 100", "Rejected roll payload");
}
