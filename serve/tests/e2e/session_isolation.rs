use futures_util::StreamExt;
use intake::protocol::{ChatRequest, IdRequest};
use intake::{CandidateField, ClientRequest, MockLlm};
use tokio_tungstenite::connect_async;

use super::common;

#[tokio::test]
async fn e2e_connections_do_not_share_sessions() {
    let (addr, server_handle) = common::spawn_server(MockLlm::replying("noted"), "gsk_env", false).await;

    let (ws_a, _) = connect_async(common::ws_url(&addr)).await.unwrap();
    let (mut write_a, mut read_a) = ws_a.split();
    let (ws_b, _) = connect_async(common::ws_url(&addr)).await.unwrap();
    let (mut write_b, mut read_b) = ws_b.split();

    let (resp, _) = common::send_and_recv(
        &mut write_a,
        &mut read_a,
        &ClientRequest::Chat(ChatRequest {
            id: "a".into(),
            message: "mail me at a@example.com".into(),
        }),
    )
    .await
    .unwrap();
    let a = common::expect_session(resp).session;
    assert_eq!(a.profile.get(CandidateField::EmailAddress), Some("a@example.com"));
    assert!(a.api_key_set);

    let (resp, _) = common::send_and_recv(
        &mut write_b,
        &mut read_b,
        &ClientRequest::Snapshot(IdRequest { id: "b".into() }),
    )
    .await
    .unwrap();
    let b = common::expect_session(resp).session;
    assert!(b.profile.is_empty());
    assert!(b.messages.is_empty());

    server_handle.abort();
}
