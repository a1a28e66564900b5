//! # ATM Locator ドメイン層
//!
//! サンプルアプリケーションのデータモデル `testuser` を定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! atm-locator → infra → domain → shared
//! ```
//!
//! ドメイン層は `shared` のみに依存し、ストアや HTTP には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`model`] - モデル定義（フィールドのメタデータ）
//! - [`test_user`] - `testuser` レコードと入力フィールド
//!
//! ## 使用例
//!
//! ```rust
//! use atm_locator_domain::test_user::{TestUser, TestUserFields, TestUserId};
//!
//! let fields = TestUserFields::new(Some("Johnny"), Some("Test"), None::<String>);
//! let user = TestUser::new(TestUserId::new(), fields);
//! assert_eq!(user.first_name(), Some("Johnny"));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod model;
pub mod test_user;

pub use error::DomainError;
