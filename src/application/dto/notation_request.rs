// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::roll_result::RollResponse;

/// 骰子表达式投掷请求
#[derive(Debug, Deserialize, Serialize)]
pub struct NotationRequestDto {
    /// 例如 `2d6 + 3`
    pub notation: String,
}

/// 骰子表达式投掷响应
#[derive(Debug, Serialize, Deserialize)]
pub struct NotationResponseDto {
    /// 第一个步骤的文本形式，例如 `(3) + (5) + 3 = 11`
    pub content: String,
    pub result: RollResponse,
}
