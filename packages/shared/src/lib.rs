//! # ATM Locator 共有ユーティリティ
//!
//! ATM Locator ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, atm-locator）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（HTTP レスポンス変換はアプリ側の責務）

pub mod error_response;
pub mod health;
pub mod observability;
pub mod request_id;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use request_id::RequestId;
