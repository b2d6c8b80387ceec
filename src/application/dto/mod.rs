// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 API 请求的解码目标，校验之后才转换为领域模型
pub mod notation_request;
pub mod roll_payload;
