// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

use crate::config::settings::MetricsSettings;

/// 安装 Prometheus 导出器
///
/// 未启用时直接返回。地址无效或端口被占用时只记录警告
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(address = %settings.address, "Invalid metrics address: {}", e);
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次 API 请求
pub fn record_request(endpoint: &'static str, outcome: &'static str) {
    metrics::counter!(
        "dice_roll_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome
    )
    .increment(1);
}
