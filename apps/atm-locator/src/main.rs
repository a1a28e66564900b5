//! # ATM Locator サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `ATM_LOCATOR_HOST` | `0.0.0.0` | バインドアドレス |
//! | `ATM_LOCATOR_PORT` | `8080` | ポート番号 |
//! | `API_KEY` | - | 設定時は `/api/*` に API キー認証を要求する |
//! | `LOG_FORMAT` | `pretty` | `json` または `pretty` |
//! | `RUST_LOG` | `info,atm_locator=debug` | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run --bin atm-locator
//! ```

use atm_locator::{app::App, config::AppConfig};
use atm_locator_shared::observability::{LogFormat, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "設定を読み込みました");

    App::new(config).start().await?.wait().await
}
