//! # API キー認証ミドルウェア
//!
//! `API_KEY` が設定されている場合、`/api/*` へのリクエストに API キーを要求する。
//!
//! 受け付ける資格情報:
//!
//! - `apikey: <key>` ヘッダー
//! - `Authorization: Basic base64(<key>:)`（ユーザー名に API キー、パスワードは空）
//!
//! どちらも無い、または一致しない場合は 401 を返す。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use subtle::ConstantTimeEq;

use crate::error::ApiError;

/// API キーを運ぶヘッダー名
const API_KEY_HEADER: &str = "apikey";

/// Basic 認証のスキーム名（大文字小文字を区別しない）
const BASIC_SCHEME: &str = "Basic";

/// API キー認証の状態
#[derive(Debug, Clone, Default)]
pub struct ApiKeyState {
    api_key: Option<Arc<str>>,
}

impl ApiKeyState {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.map(Arc::from),
        }
    }

    /// ヘッダーの資格情報が設定済みの API キーと一致するか
    ///
    /// 認証が無効なら常に `true`。
    fn authorize(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = self.api_key.as_deref() else {
            return true;
        };

        provided_keys(headers).any(|provided| {
            // タイミング攻撃対策として定数時間比較を使用
            bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
        })
    }
}

/// リクエストに含まれる API キー候補を列挙する
fn provided_keys(headers: &HeaderMap) -> impl Iterator<Item = String> + '_ {
    let from_header = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let from_basic = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(basic_username);

    from_header.into_iter().chain(from_basic)
}

/// `Basic` 認証ヘッダーからユーザー名を取り出す
fn basic_username(value: &str) -> Option<String> {
    let (scheme, encoded) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (username, _password) = credentials.split_once(':')?;
    Some(username.to_string())
}

/// API キー認証ミドルウェア
///
/// `route_layer(from_fn_with_state(state, require_api_key))` として
/// 認証対象のルーターにのみ適用する。
pub async fn require_api_key(
    State(state): State<ApiKeyState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.authorize(request.headers()) {
        tracing::debug!(path = %request.uri().path(), "API キー認証に失敗しました");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
