//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体 `{ "error": "<message>" }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はアプリ側の責務（shared に axum 依存を入れない）
//! - バリデーションメッセージのテンプレートはここに集約し、文言のハードコードを排除する

use serde::{Deserialize, Serialize};

/// バリデーションエラーメッセージの共通プレフィックス
const VALIDATION_FAILED: &str = "Request validation failed";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// 任意のメッセージでエラーレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 401 Unauthorized
    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    /// 404 Not Found
    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    /// 500 Internal Server Error
    ///
    /// メッセージは固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

/// 必須パラメータ欠落のメッセージを組み立てる
pub fn missing_parameter_message(name: &str) -> String {
    format!("{VALIDATION_FAILED}: Parameter ({name}) is required")
}

/// フィールドの型不一致のメッセージを組み立てる
pub fn invalid_field_type_message(name: &str) -> String {
    format!("{VALIDATION_FAILED}: Field ({name}) must be a string")
}

/// 未定義フィールドのメッセージを組み立てる
pub fn unknown_field_message(name: &str) -> String {
    format!("{VALIDATION_FAILED}: Field ({name}) is not defined")
}

/// リクエストボディが JSON オブジェクトでない場合のメッセージ
pub fn body_not_object_message() -> String {
    format!("{VALIDATION_FAILED}: Body must be a JSON object")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_parameter_messageがテンプレート通りのメッセージを返す() {
        assert_eq!(
            missing_parameter_message("username"),
            "Request validation failed: Parameter (username) is required"
        );
    }

    #[test]
    fn test_jsonシリアライズでerrorフィールドのみを持つ() {
        let error = ErrorResponse::new(missing_parameter_message("username"));
        let json = serde_json::to_string(&error).unwrap();

        assert_eq!(
            json,
            r#"{"error":"Request validation failed: Parameter (username) is required"}"#
        );
    }

    #[test]
    fn test_フィールド系メッセージのテンプレート() {
        assert_eq!(
            invalid_field_type_message("email"),
            "Request validation failed: Field (email) must be a string"
        );
        assert_eq!(
            unknown_field_message("age"),
            "Request validation failed: Field (age) is not defined"
        );
        assert_eq!(
            body_not_object_message(),
            "Request validation failed: Body must be a JSON object"
        );
    }

    #[test]
    fn test_固定メッセージのコンストラクタ() {
        assert_eq!(ErrorResponse::unauthorized().error, "Unauthorized");
        assert_eq!(ErrorResponse::not_found().error, "Not Found");
        assert_eq!(ErrorResponse::internal_error().error, "Internal Server Error");
    }
}
