//! # ATM Locator サーバー
//!
//! メモリ上の testuser モデルと、それを公開する小さな HTTP API。
//!
//! ```text
//! ┌──────────┐     ┌──────────────────────────────┐     ┌──────────────┐
//! │  Client  │────▶│ router (axum)                │────▶│ MemoryStore  │
//! └──────────┘     │  handler → usecase (Mutex)   │     └──────────────┘
//!                  └──────────────────────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター組み立てと起動・停止
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - API キー認証、Request ID
//! - [`usecase`] - 入力検証とストアへのアクセス
//!
//! ## 依存関係
//!
//! - `atm_locator_domain`: testuser モデル、モデル定義、ドメインエラー
//! - `atm_locator_infra`: レコードストア
//! - `atm_locator_shared`: エラーレスポンス、ヘルスチェック、Observability
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use atm_locator::{app::App, config::AppConfig};
//!
//! let running = App::new(AppConfig::from_env()?).start().await?;
//! println!("listening on {}", running.local_addr());
//! running.stop().await?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
