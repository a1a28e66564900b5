//! # リクエスト識別子
//!
//! 1 回の HTTP リクエストを識別する ID。
//! モデル API のレスポンスエンベロープ（`"request-id"`）とログの両方で使用し、
//! クライアントから見えるレスポンスとサーバーログを突き合わせられるようにする。
//!
//! ## 設計判断
//!
//! - **Newtype パターン**: `String` をラップし、他の文字列と取り違えないようにする
//! - **UUID v7 採用**: タイムスタンプを含むため時系列でソート可能
//! - **文字列表現**: クライアント提供の `X-Request-Id` は UUID とは限らないため、
//!   内部は文字列で保持する
//!
//! ## 使用例
//!
//! ```rust
//! use atm_locator_shared::RequestId;
//!
//! // 新規生成（UUID v7 ベース）
//! let id = RequestId::new();
//!
//! // HTTP ヘッダから受け取った値で作成
//! let id = RequestId::from_string("client-request-id");
//! assert_eq!(id.as_str(), "client-request-id");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// リクエストの一意識別子
///
/// HTTP ヘッダ `X-Request-Id` として伝播させることを想定。
/// シリアライズ時は素の文字列になる（`#[serde(transparent)]`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// 新しいリクエスト ID を生成する（UUID v7）
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// 文字列からリクエスト ID を作成する
    ///
    /// HTTP ヘッダなど外部から受け取った値を型付けする際に使用する。
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 内部の文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    /// `tracing` マクロの `%` フォーマッタで使用される。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
