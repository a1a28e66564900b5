//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! API キー認証の対象外。
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use atm_locator_shared::HealthResponse;
use axum::Json;

/// ヘルスチェックエンドポイント
///
/// アプリケーション自体の起動状態のみを返す。常に 200 OK。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
