//! TalentScout web server (axum + ws).
//!
//! `GET /` serves the intake page, `GET /ws` upgrades to a WebSocket that carries
//! [`intake::ClientRequest`] / [`intake::ServerResponse`] frames. Every connection owns its own
//! [`intake::SessionState`], so candidates never see each other's data.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`run_serve_with`], [`ServeContext`].

mod app;
mod connection;
mod dispatch;
mod response;

use std::sync::Arc;

use config::IntakeSettings;
use intake::ReplyGenerator;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

use app::{router, AppState};

/// Shared by all connections: the reply generator and the API key new sessions start with.
#[derive(Clone)]
pub struct ServeContext {
    pub generator: ReplyGenerator,
    pub default_api_key: String,
}

impl ServeContext {
    pub fn new(generator: ReplyGenerator, default_api_key: impl Into<String>) -> Self {
        Self {
            generator,
            default_api_key: default_api_key.into(),
        }
    }

    /// OpenAI-compatible generator and default key from settings.
    pub fn from_settings(settings: &IntakeSettings) -> Self {
        info!(
            model = %settings.model,
            base_url = %settings.base_url,
            default_key = settings.has_api_key(),
            "reply generator configured"
        );
        Self::new(
            ReplyGenerator::from_settings(settings),
            settings.api_key.clone(),
        )
    }
}

/// Runs the server on an existing listener with an explicit context. Used by tests (bind to
/// 127.0.0.1:0, inject a mock connector, then pass the listener).
/// When `once` is true, handles one WebSocket connection, then returns.
pub async fn run_serve_with(
    listener: TcpListener,
    once: bool,
    context: ServeContext,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("TalentScout listening on http://{} (WebSocket at ws://{}/ws)", addr, addr);
    if once {
        info!("will exit after first connection is done (once mode, used by tests)");
    }
    if context.default_api_key.is_empty() {
        info!("no default API key; sessions use fallback replies until a key is set");
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let state = Arc::new(AppState {
        shutdown_tx: Arc::new(std::sync::Mutex::new(if once {
            Some(shutdown_tx)
        } else {
            None
        })),
        context: Arc::new(context),
    });

    let app = router(state);

    if once {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await?;
        info!("connection done, exiting (once mode)");
    } else {
        axum::serve(listener, app).await?;
    }
    Ok(())
}

/// Runs the server on an existing listener, configured from the environment.
pub async fn run_serve_on_listener(
    listener: TcpListener,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = IntakeSettings::from_env();
    run_serve_with(listener, once, ServeContext::from_settings(&settings)).await
}

/// Runs the server. Listens on `addr`, or `TALENTSCOUT_ADDR` (default 127.0.0.1:8080).
pub async fn run_serve(
    addr: Option<&str>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = IntakeSettings::from_env();
    let addr = addr.unwrap_or(&settings.addr);
    let listener = TcpListener::bind(addr).await?;
    run_serve_with(listener, once, ServeContext::from_settings(&settings)).await
}
