use futures_util::{SinkExt, StreamExt};
use intake::ServerResponse;
use std::time::Duration;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::common;

#[tokio::test]
async fn e2e_invalid_json_returns_error() {
    let (addr, server_handle) = common::spawn_server_once().await;

    let (ws, _) = connect_async(common::ws_url(&addr)).await.unwrap();
    let (mut write, mut read) = ws.split();

    write
        .send(Message::Text("not valid json".to_string()))
        .await
        .unwrap();
    let (resp, received) = common::recv(&mut read).await.unwrap();

    assert!(
        received.contains("\"type\":\"error\"") && received.contains("parse error"),
        "expected error for invalid JSON, received: {}",
        received
    );
    match &resp {
        ServerResponse::Error(e) => {
            assert!(e.id.is_none());
            assert!(e.error.starts_with("parse error: "));
        }
        _ => panic!("expected Error for invalid JSON, got {:?}", resp),
    }

    // Unknown request types are parse errors too; the connection stays usable.
    write
        .send(Message::Text(r#"{"type":"run","id":"r1"}"#.to_string()))
        .await
        .unwrap();
    let (resp, _) = common::recv(&mut read).await.unwrap();
    assert!(matches!(resp, ServerResponse::Error(_)));

    drop(write);
    drop(read);
    let _ = timeout(Duration::from_secs(5), server_handle).await;
}
