// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：已校验的投掷请求与投掷结果
/// - 服务（services）：投掷与骰子表达式解析
pub mod models;
pub mod services;
