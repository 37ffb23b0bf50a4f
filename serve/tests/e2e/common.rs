//! Shared helpers for e2e tests. Received responses are logged with `[e2e] received: ...`.
//! Run tests with `--nocapture` to see them.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use intake::{ClientRequest, MockLlm, ReplyGenerator, ServerResponse};
use serve::ServeContext;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;

pub type ServerHandle =
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>;

/// Bind to a random port and spawn the server with `llm` as the model. Returns
/// (`host:port`, server_handle).
pub async fn spawn_server(llm: MockLlm, default_api_key: &str, once: bool) -> (String, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let context = ServeContext::new(ReplyGenerator::new(Arc::new(llm)), default_api_key);
    let server_handle = tokio::spawn(serve::run_serve_with(listener, once, context));
    (addr, server_handle)
}

/// Once-mode server whose sessions have no API key (fallback replies only).
pub async fn spawn_server_once() -> (String, ServerHandle) {
    spawn_server(MockLlm::failing(), "", true).await
}

pub fn ws_url(addr: &str) -> String {
    format!("ws://{}/ws", addr)
}

/// Returns the parsed response and the raw received JSON so tests can assert on wire content.
pub async fn send_and_recv<W, R>(
    write: &mut W,
    read: &mut R,
    req: &ClientRequest,
) -> Result<(ServerResponse, String), Box<dyn std::error::Error + Send + Sync>>
where
    W: SinkExt<Message> + Unpin,
    W::Error: std::error::Error + Send + Sync + 'static,
    R: StreamExt<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let json = serde_json::to_string(req)?;
    write.send(Message::Text(json)).await?;
    recv(read).await
}

pub async fn recv<R>(
    read: &mut R,
) -> Result<(ServerResponse, String), Box<dyn std::error::Error + Send + Sync>>
where
    R: StreamExt<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let read_timeout = Duration::from_secs(10);
    let opt = timeout(read_timeout, read.next()).await.map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout waiting for response")
    })?;
    let msg =
        opt.ok_or_else(|| std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no message"))??;
    let text = msg
        .to_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let received = text.to_string();
    eprintln!("[e2e] received: {}", received);
    let resp: ServerResponse = serde_json::from_str(text)?;
    Ok((resp, received))
}

/// Unwraps a `session` response or panics with the actual frame.
pub fn expect_session(resp: ServerResponse) -> intake::protocol::SessionResponse {
    match resp {
        ServerResponse::Session(s) => *s,
        other => panic!("expected session response, got {:?}", other),
    }
}
