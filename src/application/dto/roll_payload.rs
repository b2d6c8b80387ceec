// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// 未缺省时的投掷次数与骰子数量
pub const DEFAULT_COUNT: i64 = 1;

/// 投掷请求数据传输对象
///
/// 解码目标，尚未校验。缺失字段从 [`RollPayloadDto::build_default`] 填充，
/// 只有经过校验转换为 `RollPayload` 之后才能被使用
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "PascalCase", default = "RollPayloadDto::build_default")]
pub struct RollPayloadDto {
    /// 骰子组列表，保持输入顺序
    #[validate(nested)]
    #[serde(deserialize_with = "null_as_zero")]
    pub dice: Vec<DiceSpecDto>,
    /// 整体重复投掷次数
    #[validate(range(min = 0, max = 100))]
    #[serde(deserialize_with = "null_as_default_count")]
    pub count: i64,
}

impl RollPayloadDto {
    /// 解码前的初始值：`count = 1`，其余字段为零值
    pub fn build_default() -> Self {
        Self {
            dice: Vec::new(),
            count: DEFAULT_COUNT,
        }
    }
}

/// 单组骰子数据传输对象
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "PascalCase", default = "DiceSpecDto::build_default")]
pub struct DiceSpecDto {
    /// 骰子数量
    #[validate(range(min = 0, max = 100))]
    #[serde(deserialize_with = "null_as_default_count")]
    pub count: i64,
    /// 每个骰子的面数，没有缺省值
    #[validate(range(min = 1, max = 1000))]
    #[serde(deserialize_with = "null_as_zero")]
    pub sides: i64,
    /// 加到该组结果上的修正值，不做约束
    #[serde(deserialize_with = "null_as_zero")]
    pub modifier: i64,
}

impl DiceSpecDto {
    /// 解码前的初始值：`count = 1`，`sides` 与 `modifier` 为零值
    pub fn build_default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            sides: 0,
            modifier: 0,
        }
    }
}

/// 显式的 `null` 等同于缺失字段，保留缺省值
fn null_as_default_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(DEFAULT_COUNT))
}

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
