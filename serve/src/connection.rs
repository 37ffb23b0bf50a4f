//! WebSocket connection lifecycle: one session per socket, recv loop, request dispatch.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use intake::{protocol::ErrorResponse, ClientRequest, ServerResponse, SessionState};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::dispatch::handle_request;
use super::response::send_response;
use super::ServeContext;

pub(crate) async fn handle_socket(
    mut socket: WebSocket,
    shutdown_tx: Option<oneshot::Sender<()>>,
    context: Arc<ServeContext>,
) {
    let mut session = SessionState::new(context.default_api_key.clone());
    info!("candidate session opened");

    while let Some(res) = socket.recv().await {
        let msg = match res {
            Ok(m) => m,
            Err(e) => {
                warn!("read error (client closed?): {}", e);
                let _ = socket.close().await;
                break;
            }
        };
        let text = match &msg {
            Message::Text(t) => t.clone(),
            Message::Binary(b) => String::from_utf8_lossy(b).into_owned(),
            Message::Close(_) => break,
            _ => continue,
        };

        let response = parse_and_handle(&text, &mut session, &context).await;
        if let Err(e) = send_response(&mut socket, &response).await {
            warn!("send error: {}", e);
            let _ = socket.close().await;
            break;
        }
    }

    debug!(phase = ?session.phase(), "candidate session closed");
    if let Some(tx) = shutdown_tx {
        let _ = tx.send(());
    }
}

async fn parse_and_handle(
    text: &str,
    session: &mut SessionState,
    context: &ServeContext,
) -> ServerResponse {
    match serde_json::from_str::<ClientRequest>(text) {
        Ok(req) => handle_request(req, session, &context.generator).await,
        Err(e) => ServerResponse::Error(ErrorResponse {
            id: None,
            error: format!("parse error: {}", e),
        }),
    }
}
