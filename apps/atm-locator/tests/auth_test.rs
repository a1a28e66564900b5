//! API キー認証統合テスト
//!
//! ## テストケース
//!
//! - `API_KEY` 設定時、資格情報なしの `/api/*` は 401
//! - `apikey` ヘッダーまたは Basic 認証で通過する
//! - `/health` は認証対象外

mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use helpers::{create_test_app_with_api_key, parse_body};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

const API_KEY: &str = "test-api-key";

async fn get(uri: &str, headers: &[(&str, String)]) -> axum::http::Response<Body> {
    let (app, _) = create_test_app_with_api_key(Some(API_KEY));
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, value);
    }

    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_資格情報なしは401を返す() {
    let response = get("/api/greet?username=x", &[]).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    assert_eq!(parse_body(response).await, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_誤ったapi_keyは401を返す() {
    let response = get("/api/testuser", &[("apikey", "wrong".to_string())]).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_apikeyヘッダーで通過する() {
    let response = get("/api/greet?username=x", &[("apikey", API_KEY.to_string())]).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_basic認証で通過する() {
    let credentials = format!("Basic {}", STANDARD.encode(format!("{API_KEY}:")));

    let response = get("/api/testuser", &[("authorization", credentials)]).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_healthは認証不要() {
    let response = get("/health", &[]).await;

    assert_eq!(response.status(), StatusCode::OK);
}
