//! 統合テスト共通ヘルパー

// テストファイルごとに使うヘルパーが異なる
#![allow(dead_code)]

use std::sync::Arc;

use atm_locator::{
    app::{App, AppState},
    config::AppConfig,
};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response},
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

/// テスト用の設定（ループバック、空きポート）
pub fn test_config(api_key: Option<&str>) -> AppConfig {
    AppConfig {
        host:    "127.0.0.1".to_string(),
        port:    0,
        api_key: api_key.map(str::to_string),
    }
}

/// テスト用アプリケーションのルーターと共有状態を構築する
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_api_key(None)
}

pub fn create_test_app_with_api_key(api_key: Option<&str>) -> (Router, Arc<AppState>) {
    let app = App::new(test_config(api_key));
    (app.router(), app.state())
}

/// リクエストを送信する（ボディがあれば JSON として送る）
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<JsonValue>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// レスポンスボディを JSON として解析する
pub async fn parse_body(response: Response<Body>) -> JsonValue {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// レスポンスボディを文字列として取り出す
pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
