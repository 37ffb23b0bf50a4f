use futures_util::StreamExt;
use intake::protocol::{ChatRequest, IdRequest, QuickReplyRequest, SetApiKeyRequest};
use intake::{ClientRequest, MockLlm, Phase, QuickReply, ServerResponse, FAREWELL};
use std::time::Duration;
use tokio::time::timeout;
use tokio_tungstenite::connect_async;

use super::common;

fn chat(id: &str, message: &str) -> ClientRequest {
    ClientRequest::Chat(ChatRequest {
        id: id.to_string(),
        message: message.to_string(),
    })
}

#[tokio::test]
async fn e2e_chat_without_key_uses_fallback_and_extracts() {
    let (addr, server_handle) = common::spawn_server_once().await;
    let (ws, _) = connect_async(common::ws_url(&addr)).await.unwrap();
    let (mut write, mut read) = ws.split();

    let (resp, _) = common::send_and_recv(
        &mut write,
        &mut read,
        &chat("c1", "Hi! I'm at ada@example.com with 5 years. tech stack: React, Node"),
    )
    .await
    .unwrap();
    let resp = common::expect_session(resp);
    assert_eq!(resp.id, "c1");
    assert_eq!(
        resp.reply.as_deref(),
        Some("Got it! I still need: Full Name, Phone Number, Desired Position(s), Current Location. Could you share those?")
    );
    let session = resp.session;
    assert_eq!(session.filled, 3);
    assert!(!session.api_key_set);
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.questions.len(), 4);
    assert!(!session.quick_replies_available);

    let (resp, received) = common::send_and_recv(&mut write, &mut read, &chat("c2", "bye"))
        .await
        .unwrap();
    assert!(received.contains("\"phase\":\"ended\""));
    let resp = common::expect_session(resp);
    assert_eq!(resp.reply.as_deref(), Some(FAREWELL));

    let (resp, _) = common::send_and_recv(&mut write, &mut read, &chat("c3", "hello?"))
        .await
        .unwrap();
    match resp {
        ServerResponse::Error(e) => assert_eq!(e.id.as_deref(), Some("c3")),
        other => panic!("expected error after farewell, got {:?}", other),
    }

    let (resp, _) = common::send_and_recv(
        &mut write,
        &mut read,
        &ClientRequest::Reset(IdRequest { id: "r".into() }),
    )
    .await
    .unwrap();
    let resp = common::expect_session(resp);
    assert_eq!(resp.session.phase, Phase::CollectingFields);
    assert!(resp.session.messages.is_empty());

    drop(write);
    drop(read);
    let _ = timeout(Duration::from_secs(5), server_handle).await;
}

#[tokio::test]
async fn e2e_key_set_at_runtime_enables_model_replies() {
    let mock = MockLlm::replying("Welcome to TalentScout! What's your name?");
    let (addr, server_handle) = common::spawn_server(mock.clone(), "", true).await;
    let (ws, _) = connect_async(common::ws_url(&addr)).await.unwrap();
    let (mut write, mut read) = ws.split();

    let (resp, _) = common::send_and_recv(
        &mut write,
        &mut read,
        &ClientRequest::SetApiKey(SetApiKeyRequest {
            id: "k".into(),
            api_key: "gsk_runtime".into(),
        }),
    )
    .await
    .unwrap();
    let resp = common::expect_session(resp);
    assert!(resp.session.api_key_set);

    let (resp, received) = common::send_and_recv(
        &mut write,
        &mut read,
        &ClientRequest::QuickReply(QuickReplyRequest {
            id: "q".into(),
            reply: QuickReply::ShareInfo,
        }),
    )
    .await
    .unwrap();
    assert!(!received.contains("gsk_runtime"));
    let resp = common::expect_session(resp);
    assert_eq!(
        resp.reply.as_deref(),
        Some("Welcome to TalentScout! What's your name?")
    );
    assert_eq!(mock.connected_keys(), vec!["gsk_runtime".to_string()]);

    drop(write);
    drop(read);
    let _ = timeout(Duration::from_secs(5), server_handle).await;
}
