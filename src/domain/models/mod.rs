// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 投掷请求（roll_payload）：只能通过校验构造的请求
/// - 投掷结果（roll_result）：每一步的点数与合计
pub mod roll_payload;
pub mod roll_result;
