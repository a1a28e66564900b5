//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError) / axum の抽出エラー (JsonRejection)
//!        ↓ From
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + {"error": "..."})
//! ```
//!
//! レコードの不在はストア層ではエラーではない（`Option::None`）。
//! HTTP 層でリソースを返せない場合に初めて [`ApiError::NotFound`] になる。

use atm_locator_domain::DomainError;
use atm_locator_shared::{ErrorResponse, error_response::missing_parameter_message};
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// `WWW-Authenticate` ヘッダーの値
const AUTHENTICATE_CHALLENGE: &str = r#"Basic realm="atm-locator""#;

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、ハンドラは `Result<_, ApiError>` を返せばよい。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// バリデーションエラー（400 Bad Request）
    ///
    /// メッセージはそのままレスポンスの `error` に入る。
    #[error("{0}")]
    Validation(String),

    /// 認証エラー（401 Unauthorized）
    #[error("Unauthorized")]
    Unauthorized,

    /// リソースが見つからない（404 Not Found）
    #[error("Not Found")]
    NotFound,

    /// 予期しないエラー（500 Internal Server Error）
    ///
    /// 詳細はログにのみ出力し、レスポンスには固定メッセージを返す。
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl ApiError {
    /// 必須パラメータ欠落のバリデーションエラー
    pub fn missing_parameter(name: &str) -> Self {
        Self::Validation(missing_parameter_message(name))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!(
            "Request validation failed: {}",
            rejection.body_text()
        ))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(format!(
            "Request validation failed: {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(msg) => ErrorResponse::new(msg.clone()),
            ApiError::Unauthorized => ErrorResponse::unauthorized(),
            ApiError::NotFound => ErrorResponse::not_found(),
            ApiError::Internal(_) => ErrorResponse::internal_error(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "リクエストの処理に失敗しました");
        } else if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "リクエストを拒否しました");
        }

        let mut response = (status, Json(body)).into_response();
        if matches!(self, ApiError::Unauthorized) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(AUTHENTICATE_CHALLENGE),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(ApiError::missing_parameter("username"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::Unauthorized, StatusCode::UNAUTHORIZED)]
    #[case(ApiError::NotFound, StatusCode::NOT_FOUND)]
    #[case(ApiError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_バリアントごとのステータスコード(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[tokio::test]
    async fn test_バリデーションエラーはerrorフィールドにメッセージを入れる() {
        let response = ApiError::missing_parameter("username").into_response();

        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "error": "Request validation failed: Parameter (username) is required"
            })
        );
    }

    #[tokio::test]
    async fn test_内部エラーの詳細はレスポンスに含めない() {
        let response = ApiError::Internal("db password leaked".to_string()).into_response();

        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Internal Server Error" })
        );
    }

    #[test]
    fn test_unauthorizedはwww_authenticateヘッダーを付ける() {
        let response = ApiError::Unauthorized.into_response();

        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            AUTHENTICATE_CHALLENGE
        );
    }

    #[test]
    fn test_domain_errorから変換できる() {
        let error: ApiError = DomainError::Validation("bad".to_string()).into();

        assert_eq!(error, ApiError::Validation("bad".to_string()));
    }
}
