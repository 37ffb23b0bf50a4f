//! Send a single `ServerResponse` as JSON over the WebSocket.

use axum::extract::ws::{Message, WebSocket};
use intake::{protocol::ErrorResponse, ServerResponse};

const SERIALIZATION_ERROR: &str = r#"{"type":"error","error":"serialization error"}"#;

/// Serializes `response`; a serialization failure is reported as an error frame instead.
pub(crate) fn encode_response(response: &ServerResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        serde_json::to_string(&ServerResponse::Error(ErrorResponse {
            id: None,
            error: format!("serialization error: {}", e),
        }))
        .unwrap_or_else(|_| SERIALIZATION_ERROR.to_string())
    })
}

pub(crate) async fn send_response(
    socket: &mut WebSocket,
    response: &ServerResponse,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    socket.send(Message::Text(encode_response(response))).await?;
    Ok(())
}
