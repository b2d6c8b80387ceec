// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use validator::Validate;

use crate::application::dto::roll_payload::{DiceSpecDto, RollPayloadDto};
use crate::utils::errors::PayloadError;

/// 已校验的投掷请求
///
/// 只能通过 `TryFrom<RollPayloadDto>` 构造，因此存在的实例总满足字段范围约束。
/// 构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RollPayload {
    dice: Vec<DiceSpec>,
    count: i64,
}

impl RollPayload {
    /// 骰子组，保持输入顺序
    pub fn dice(&self) -> &[DiceSpec] {
        &self.dice
    }

    /// 整体重复投掷次数，范围 [0, 100]
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl TryFrom<RollPayloadDto> for RollPayload {
    type Error = PayloadError;

    /// 对整棵结构校验一次（包括嵌套的骰子组），失败时报告全部违规字段
    fn try_from(dto: RollPayloadDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        Ok(Self {
            dice: dto.dice.into_iter().map(DiceSpec::from_validated).collect(),
            count: dto.count,
        })
    }
}

/// 已校验的单组骰子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiceSpec {
    count: i64,
    sides: i64,
    modifier: i64,
}

impl DiceSpec {
    // Caller must have validated the enclosing structure.
    fn from_validated(dto: DiceSpecDto) -> Self {
        Self {
            count: dto.count,
            sides: dto.sides,
            modifier: dto.modifier,
        }
    }

    /// 骰子数量，范围 [0, 100]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// 面数，范围 [1, 1000]
    pub fn sides(&self) -> i64 {
        self.sides
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }
}

impl TryFrom<DiceSpecDto> for DiceSpec {
    type Error = PayloadError;

    fn try_from(dto: DiceSpecDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        Ok(Self::from_validated(dto))
    }
}
