// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dice_roll::application::payload_parser::PayloadParser;
use dice_roll::presentation::routes;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> Router {
    routes::routes(Arc::new(PayloadParser::new()))
}

async fn post_json(uri: &str, body: &'static str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn roll_returns_one_step_per_count() {
    let (status, body) = post_json(
        "/v1/roll",
        r#"{"Count": 2, "Dice": [{"Count": 3, "Sides": 6, "Modifier": 1}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let steps = body["step"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    for step in steps {
        let group = &step["rolls"][0];
        assert_eq!(group["count"], 3);
        assert_eq!(group["sides"], 6);
        assert_eq!(group["modifier"], 1);
        assert_eq!(group["rolls"].as_array().unwrap().len(), 3);
        assert_eq!(step["total"], group["total"]);
    }
}

#[tokio::test]
async fn roll_rejects_malformed_json() {
    let (status, body) = post_json("/v1/roll", r#"{"Count": "x"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
    assert!(body.get("violations").is_none());
}

#[tokio::test]
async fn roll_reports_every_violation() {
    let (status, body) = post_json(
        "/v1/roll",
        r#"{"Count": 101, "Dice": [{"Sides": 0}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAYLOAD");
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["Count", "Dice[0].Sides"]);
}

#[tokio::test]
async fn notation_roll_formats_first_step() {
    let (status, body) = post_json("/v1/roll/notation", r#"{"notation": "2d1 + 3"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "(1) + (1) + 3 = 5");
    assert_eq!(body["result"]["step"][0]["total"], 5);
}

#[tokio::test]
async fn notation_syntax_error_is_rejected() {
    let (status, body) = post_json("/v1/roll/notation", r#"{"notation": "+3"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_NOTATION");
}

#[tokio::test]
async fn notation_range_error_uses_payload_shape() {
    let (status, body) = post_json("/v1/roll/notation", r#"{"notation": "1d1001"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAYLOAD");
    assert_eq!(body["violations"][0]["field"], "Dice[0].Sides");
}

#[tokio::test]
async fn validate_dice_applies_defaults() {
    let (status, body) = post_json("/v1/dice/validate", r#"{"Sides": 8}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Count": 1, "Sides": 8, "Modifier": 0}));
}

#[tokio::test]
async fn validate_dice_rejects_missing_sides() {
    let (status, body) = post_json("/v1/dice/validate", r#"{"Count": 1}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"][0]["field"], "Sides");
}

#[tokio::test]
async fn version_reports_package_version() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], env!("CARGO_PKG_VERSION").as_bytes());
}

#[tokio::test]
async fn roll_rejects_total_overflow() {
    let (status, body) = post_json(
        "/v1/roll",
        r#"{"Dice": [{"Sides": 6, "Modifier": 9223372036854775807}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ROLL_OVERFLOW");
    assert!(body.get("violations").is_none());
}

#[tokio::test]
async fn notation_overflow_is_rejected() {
    let (status, body) = post_json(
        "/v1/roll/notation",
        r#"{"notation": "1d6 + 9223372036854775807"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ROLL_OVERFLOW");
}

#[tokio::test]
async fn notation_rejects_malformed_json() {
    for body in [r#"{"notation": 5}"#, r#"{"notation": "2d6""#, r#"{}"#] {
        let (status, response) = post_json("/v1/roll/notation", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response["code"], "INVALID_JSON", "body: {}", body);
    }
}

#[tokio::test]
async fn violations_follow_dice_order_past_ten() {
    let (status, body) = post_json(
        "/v1/roll",
        r#"{"Dice": [
            {"Sides": 6}, {"Sides": 6}, {"Sides": 0}, {"Sides": 6},
            {"Sides": 6}, {"Sides": 6}, {"Sides": 6}, {"Sides": 6},
            {"Sides": 6}, {"Sides": 6}, {"Sides": 0}, {"Sides": 6}
        ]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["Dice[2].Sides", "Dice[10].Sides"]);
}
