// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::de::DeserializeOwned;

use crate::application::dto::roll_payload::{DiceSpecDto, RollPayloadDto};
use crate::domain::models::roll_payload::{DiceSpec, RollPayload};
use crate::utils::errors::PayloadError;

/// 载荷解析器
///
/// 依次执行三个阶段：缺省值注入、JSON 解码、范围校验。
/// 解析器不持有可变状态，启动时创建一次后可在请求之间共享
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadParser;

impl PayloadParser {
    pub fn new() -> Self {
        Self
    }

    /// 将 JSON 字节解析为已校验的值
    ///
    /// # 参数
    ///
    /// * `bytes` - 原始 JSON 文档
    ///
    /// # 返回值
    ///
    /// * `Ok(T)` - 通过校验的值
    /// * `Err(PayloadError::Decode)` - JSON 格式错误或类型不匹配，此时不会执行校验
    /// * `Err(PayloadError::Validation)` - 一个或多个字段超出范围
    pub fn parse<D, T>(&self, bytes: &[u8]) -> Result<T, PayloadError>
    where
        D: DeserializeOwned,
        T: TryFrom<D, Error = PayloadError>,
    {
        let dto = decode::<D>(bytes)?;
        validate(dto)
    }

    /// 解析投掷请求
    pub fn parse_roll_payload(&self, bytes: &[u8]) -> Result<RollPayload, PayloadError> {
        self.parse::<RollPayloadDto, RollPayload>(bytes)
    }

    /// 解析单组骰子
    pub fn parse_dice_spec(&self, bytes: &[u8]) -> Result<DiceSpec, PayloadError> {
        self.parse::<DiceSpecDto, DiceSpec>(bytes)
    }
}

/// 解码阶段
///
/// 缺失字段由 DTO 的 `build_default` 提供，输入中显式给出的值（包括 `0`）会覆盖缺省值
pub fn decode<D: DeserializeOwned>(bytes: &[u8]) -> Result<D, PayloadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// 校验阶段
pub fn validate<D, T>(dto: D) -> Result<T, PayloadError>
where
    T: TryFrom<D, Error = PayloadError>,
{
    T::try_from(dto)
}
