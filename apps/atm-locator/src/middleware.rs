//! # ミドルウェア
//!
//! - [`api_key`]: `/api/*` の API キー認証
//! - [`request_id`]: ハンドラから Request ID を参照するための extractor

pub mod api_key;
pub mod request_id;

pub use api_key::{ApiKeyState, require_api_key};
pub use request_id::CurrentRequestId;
