//! # アプリケーション組み立てとライフサイクル
//!
//! ストア・ユースケース・ルーターを組み立て、明示的に起動・停止する。
//!
//! ```text
//! App::new(config)
//!     │ start()   TCP リスナーを確保し、サーバータスクを起動
//!     ▼
//! RunningApp
//!     │ stop()    シャットダウンを通知し、サーバータスクの終了を待つ
//!     ▼           （リスナーはここで解放される）
//! 停止
//! ```
//!
//! ## レイヤー構成
//!
//! レイヤーは下に書いたものが外側:
//!
//! 1. `SetRequestIdLayer`（最外）: UUID v7 を生成（またはクライアント提供値を使用）
//! 2. `TraceLayer`: リクエストごとのスパンに request_id を含める
//! 3. `PropagateRequestIdLayer`: レスポンスヘッダーに `X-Request-Id` をコピー
//! 4. `CatchPanicLayer`: ハンドラの panic を 500 に変換
//!
//! API キー認証は `/api/*` のルートにのみ `route_layer` で適用する。

use std::{any::Any, net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use atm_locator_infra::{MemoryTestUserStore, TestUserRepository};
use atm_locator_shared::observability::{MakeRequestUuidV7, make_request_span};
use axum::{
    Router,
    body::Body,
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::AppConfig,
    error::ApiError,
    handler::{
        create_test_user,
        delete_test_user,
        get_test_api,
        get_test_user,
        greet,
        health_check,
        list_test_users,
        update_test_user,
    },
    middleware::{ApiKeyState, require_api_key},
    usecase::TestUserUseCase,
};

/// ハンドラで共有する状態
pub struct AppState {
    pub test_users: TestUserUseCase,
}

impl AppState {
    pub fn new(repository: impl TestUserRepository + 'static) -> Self {
        Self {
            test_users: TestUserUseCase::new(repository),
        }
    }
}

/// ルーターを構築する
pub fn build_router(state: Arc<AppState>, api_key: ApiKeyState) -> Router {
    let api = Router::new()
        .route("/api/greet", get(greet))
        .route("/api/testapi/{id}", get(get_test_api))
        .route(
            "/api/testuser",
            get(list_test_users).post(create_test_user),
        )
        .route(
            "/api/testuser/{id}",
            get(get_test_user)
                .put(update_test_user)
                .delete(delete_test_user),
        )
        .route_layer(from_fn_with_state(api_key, require_api_key))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::Internal(detail.to_string()).into_response()
}

/// 起動前のアプリケーション
pub struct App {
    config: AppConfig,
    state:  Arc<AppState>,
}

impl App {
    /// メモリストアでアプリケーションを組み立てる
    pub fn new(config: AppConfig) -> Self {
        Self::with_repository(config, MemoryTestUserStore::new())
    }

    /// 任意のストアでアプリケーションを組み立てる
    pub fn with_repository(config: AppConfig, repository: impl TestUserRepository + 'static) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new(repository)),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn router(&self) -> Router {
        build_router(
            self.state(),
            ApiKeyState::new(self.config.api_key.clone()),
        )
    }

    /// TCP リスナーを確保してサーバーを起動する
    ///
    /// ポート `0` を指定すると OS が空きポートを割り当てる。
    /// 実際のアドレスは [`RunningApp::local_addr`] で取得できる。
    pub async fn start(self) -> anyhow::Result<RunningApp> {
        tracing::info!(
            host = %self.config.host,
            port = self.config.port,
            auth = self.config.api_key.is_some(),
            "ATM Locator サーバーを起動します"
        );

        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| {
                format!(
                    "{}:{} にバインドできませんでした",
                    self.config.host, self.config.port
                )
            })?;
        let local_addr = listener.local_addr()?;

        let router = self.router();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    // 送信側が drop された場合も停止する
                    shutdown_rx.await.ok();
                })
                .await
        });

        tracing::info!(%local_addr, "ATM Locator サーバーが起動しました");

        Ok(RunningApp {
            local_addr,
            state: self.state,
            shutdown: shutdown_tx,
            server,
        })
    }
}

/// 起動中のアプリケーション
pub struct RunningApp {
    local_addr: SocketAddr,
    state:      Arc<AppState>,
    shutdown:   oneshot::Sender<()>,
    server:     JoinHandle<std::io::Result<()>>,
}

impl RunningApp {
    /// バインドされたアドレス
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// シャットダウンを通知し、サーバータスクの終了を待つ
    pub async fn stop(self) -> anyhow::Result<()> {
        if self.shutdown.send(()).is_err() {
            tracing::debug!("サーバータスクは既に終了しています");
        }

        self.server
            .await
            .context("サーバータスクが異常終了しました")?
            .context("サーバーがエラーで終了しました")?;

        tracing::info!("ATM Locator サーバーを停止しました");
        Ok(())
    }

    /// Ctrl-C を受信するまで稼働し、受信したら停止する
    pub async fn wait(self) -> anyhow::Result<()> {
        let Self {
            shutdown,
            mut server,
            ..
        } = self;

        let signaled = tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("シグナルハンドラを登録できませんでした")?;
                true
            }
            result = &mut server => {
                result.context("サーバータスクが異常終了しました")??;
                false
            }
        };

        if signaled {
            tracing::info!("シャットダウンシグナルを受信しました");
            if shutdown.send(()).is_err() {
                tracing::debug!("サーバータスクは既に終了しています");
            }
            server
                .await
                .context("サーバータスクが異常終了しました")??;
        }

        tracing::info!("ATM Locator サーバーを停止しました");
        Ok(())
    }
}
