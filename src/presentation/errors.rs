// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::services::notation::NotationError;
use crate::domain::services::roll_service::RollError;
use crate::utils::errors::PayloadError;

/// 应用错误类型
///
/// 将解析、校验与投掷错误统一映射为 HTTP 响应
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Notation(NotationError),

    #[error(transparent)]
    Roll(#[from] RollError),
}

impl AppError {
    /// 响应体中的 `code` 字段
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Payload(PayloadError::Decode(_)) => "INVALID_JSON",
            AppError::Payload(PayloadError::Validation(_)) => "INVALID_PAYLOAD",
            AppError::Notation(_) => "INVALID_NOTATION",
            AppError::Roll(RollError::TotalOverflow) => "ROLL_OVERFLOW",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // The payload is well formed and valid; only its arithmetic fails.
            AppError::Roll(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<NotationError> for AppError {
    fn from(err: NotationError) -> Self {
        match err {
            // Range failures look the same whichever way the payload arrived.
            NotationError::Payload(inner) => AppError::Payload(inner),
            other => AppError::Notation(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let body = match &self {
            AppError::Payload(PayloadError::Validation(report)) => json!({
                "code": code,
                "message": self.to_string(),
                "violations": report.violations(),
            }),
            _ => json!({ "code": code, "message": self.to_string() }),
        };

        (self.status(), Json(body)).into_response()
    }
}
