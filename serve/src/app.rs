//! Axum app: state, router, page and WebSocket upgrade handlers.

use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::{Html, Response},
    routing::get,
    Router,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{info_span, Instrument};

use super::connection::handle_socket;
use super::ServeContext;

const INDEX_HTML: &str = include_str!("../static/index.html");

static NEXT_CONNECTION: AtomicU64 = AtomicU64::new(1);

/// Shared state for the server. Session data is not here: it lives in each connection task.
#[derive(Clone)]
pub(crate) struct AppState {
    /// When set, the first WebSocket connection to close will send on this to signal server exit (once mode).
    pub(crate) shutdown_tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
    pub(crate) context: Arc<ServeContext>,
}

/// `GET /` serves the intake page; `GET /ws` is the WebSocket endpoint.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ws", get(ws_handler))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    let shutdown_tx = state.shutdown_tx.lock().ok().and_then(|mut g| g.take());
    let context = state.context.clone();
    let span = info_span!("connection", conn = NEXT_CONNECTION.fetch_add(1, Ordering::Relaxed));
    ws.on_upgrade(move |socket| handle_socket(socket, shutdown_tx, context).instrument(span))
}
