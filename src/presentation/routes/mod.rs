// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::payload_parser::PayloadParser;
use crate::presentation::handlers::roll_handler;
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `parser` - 启动时创建的共享载荷解析器
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(parser: Arc<PayloadParser>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let roll_routes = Router::new()
        .route("/v1/roll", post(roll_handler::roll))
        .route("/v1/roll/notation", post(roll_handler::roll_notation))
        .route("/v1/dice/validate", post(roll_handler::validate_dice))
        .layer(Extension(parser));

    Router::new()
        .merge(public_routes)
        .merge(roll_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
