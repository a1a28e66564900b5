//! # Request ID extractor
//!
//! `SetRequestIdLayer` がリクエスト extensions に設定した
//! [`RequestId`](tower_http::request_id::RequestId) をハンドラから取り出す。

use std::convert::Infallible;

use atm_locator_shared::RequestId;
use axum::{extract::FromRequestParts, http::request::Parts};

/// 現在のリクエストの Request ID
///
/// レイヤーを通っていない場合（ハンドラ単体のテスト等）は新しい ID を採番する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRequestId(pub RequestId);

impl<S> FromRequestParts<S> for CurrentRequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<tower_http::request_id::RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .map(RequestId::from_string)
            .unwrap_or_default();

        Ok(Self(id))
    }
}
