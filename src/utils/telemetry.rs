// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// 读取 `RUST_LOG`，未设置时使用 `info,dice_roll=debug`。重复调用不会 panic
pub fn init_telemetry() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dice_roll=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    // The subscriber installed first stays in charge.
    if let Err(e) = result {
        tracing::debug!("Telemetry already initialized: {}", e);
    }
}
