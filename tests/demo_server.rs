//! End-to-end tests of the responder behind a real axum server.

use json_respond::{ErrorResponse, RespondConfig};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_ok_writes_json_body() {
    let server = common::start_demo_server(RespondConfig::default()).await;

    let res = common::client().get(server.url("/hello")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["greeting"], json!("hello"));
}

#[tokio::test]
async fn test_nil_payload_with_nulls_enabled() {
    let server = common::start_demo_server(RespondConfig::default()).await;

    let res = common::client().get(server.url("/empty")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "null");
}

#[tokio::test]
async fn test_nil_payload_with_nulls_disabled() {
    let server = common::start_demo_server(RespondConfig {
        return_nulls: false,
        ..RespondConfig::default()
    })
    .await;

    let res = common::client().get(server.url("/empty")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND, "status is still written");
    assert_eq!(res.headers()["content-type"], "application/json");
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_typed_errors_keep_their_status() {
    let server = common::start_demo_server(RespondConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/teapot")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
    let body: ErrorResponse = res.json().await.unwrap();
    assert_eq!(body, ErrorResponse::new("short and stout"));

    let res = client.get(server.url("/denied")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: ErrorResponse = res.json().await.unwrap();
    assert_eq!(body.message, "Forbidden");
}

#[tokio::test]
async fn test_plain_error_uses_fallback_status() {
    let server = common::start_demo_server(RespondConfig {
        default_error_message: "try again later".into(),
        return_raw_error: true,
        ..RespondConfig::default()
    })
    .await;

    let res = common::client().get(server.url("/broken")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "try again later",
            "rawError": "upstream refused connection",
        })
    );
}

#[tokio::test]
async fn test_raw_error_omitted_by_default() {
    let server = common::start_demo_server(RespondConfig::default()).await;

    let res = common::client().get(server.url("/broken")).send().await.unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Service Unavailable" }));
}

#[tokio::test]
async fn test_registered_typed_error_ignores_fallback() {
    let server = common::start_demo_server(RespondConfig {
        return_raw_error: true,
        ..RespondConfig::default()
    })
    .await;

    let res = common::client().get(server.url("/limited")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "slow down", "rawError": "rate limited, retry after 30s" })
    );
}
