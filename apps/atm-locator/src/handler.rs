//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とストアへのアクセスはユースケース層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs            # 親モジュール（re-export）
//! └── handler/
//!     ├── envelope.rs   # モデル API のレスポンスエンベロープ
//!     ├── greet.rs      # GET /api/greet
//!     ├── health.rs     # GET /health
//!     ├── test_api.rs   # GET /api/testapi/{id}
//!     └── test_user.rs  # /api/testuser の REST API
//! ```

pub mod envelope;
pub mod greet;
pub mod health;
pub mod test_api;
pub mod test_user;

pub use greet::greet;
pub use health::health_check;
pub use test_api::get_test_api;
pub use test_user::{
    create_test_user,
    delete_test_user,
    get_test_user,
    list_test_users,
    update_test_user,
};
