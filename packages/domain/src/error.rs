//! # ドメイン層エラー定義
//!
//! 入力がモデルの契約を満たさない場合のエラー型。
//!
//! 「レコードが存在しない」はエラーではなく `Option::None` で表現する。
//! 呼び出し側は不在を明示的に分岐させる必要がある。
//!
//! ## 使用例
//!
//! ```rust
//! use atm_locator_domain::DomainError;
//!
//! fn require(name: &str, value: Option<&str>) -> Result<(), DomainError> {
//!     match value {
//!         Some(_) => Ok(()),
//!         None => Err(DomainError::Validation(format!("{name} is required"))),
//!     }
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// メッセージはそのままクライアントに返される（400 Bad Request）。
    #[error("{0}")]
    Validation(String),
}
