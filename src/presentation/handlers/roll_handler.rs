// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{body::Bytes, extract::Extension, Json};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    application::{
        dto::notation_request::{NotationRequestDto, NotationResponseDto},
        payload_parser::{self, PayloadParser},
    },
    domain::{
        models::{
            roll_payload::{DiceSpec, RollPayload},
            roll_result::RollResponse,
        },
        services::{notation, roll_service::RollService},
    },
    infrastructure::metrics::record_request,
    presentation::errors::AppError,
};

/// 处理投掷请求
///
/// # 参数
///
/// * `parser` - 共享的载荷解析器
/// * `body` - 原始 JSON 请求体
///
/// # 返回值
///
/// 成功时返回投掷结果；解码失败返回 `INVALID_JSON`，范围校验失败返回 `INVALID_PAYLOAD`，
/// 合计溢出返回 `ROLL_OVERFLOW`
pub async fn roll(
    Extension(parser): Extension<Arc<PayloadParser>>,
    body: Bytes,
) -> Result<Json<RollResponse>, AppError> {
    let payload = match parser.parse_roll_payload(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejected roll payload: {}", e);
            record_request("roll", "rejected");
            return Err(e.into());
        }
    };

    debug!(
        count = payload.count(),
        groups = payload.dice().len(),
        "Rolling payload"
    );
    let response = roll_validated("roll", &payload)?;
    record_request("roll", "ok");

    Ok(Json(response))
}

/// 处理骰子表达式投掷请求
///
/// 请求体为 `{"notation": "2d6 + 3"}`，响应包含第一个步骤的文本形式与完整结果
pub async fn roll_notation(body: Bytes) -> Result<Json<NotationResponseDto>, AppError> {
    let result = payload_parser::decode::<NotationRequestDto>(&body)
        .map_err(AppError::from)
        .and_then(|request| {
            notation::roll_payload_from_notation(&request.notation).map_err(AppError::from)
        });

    let payload = match result {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejected dice notation: {}", e);
            record_request("notation", "rejected");
            return Err(e);
        }
    };

    let response = roll_validated("notation", &payload)?;
    let content = response
        .first_step()
        .map(|step| step.to_string())
        .unwrap_or_default();
    record_request("notation", "ok");

    Ok(Json(NotationResponseDto {
        content,
        result: response,
    }))
}

/// 校验单组骰子
///
/// 返回填充缺省值后的骰子组
pub async fn validate_dice(
    Extension(parser): Extension<Arc<PayloadParser>>,
    body: Bytes,
) -> Result<Json<DiceSpec>, AppError> {
    match parser.parse_dice_spec(&body) {
        Ok(spec) => {
            record_request("validate_dice", "ok");
            Ok(Json(spec))
        }
        Err(e) => {
            warn!("Rejected dice spec: {}", e);
            record_request("validate_dice", "rejected");
            Err(e.into())
        }
    }
}

fn roll_validated(endpoint: &'static str, payload: &RollPayload) -> Result<RollResponse, AppError> {
    RollService::new().roll(payload).map_err(|e| {
        warn!("Roll failed: {}", e);
        record_request(endpoint, "failed");
        AppError::from(e)
    })
}
