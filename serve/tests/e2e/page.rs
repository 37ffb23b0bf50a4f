use intake::MockLlm;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::common;

#[tokio::test]
async fn e2e_index_page_is_served() {
    let (addr, server_handle) = common::spawn_server(MockLlm::failing(), "", false).await;

    let mut stream = TcpStream::connect(&addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut body = String::new();
    stream.read_to_string(&mut body).await.unwrap();

    assert!(body.starts_with("HTTP/1.1 200"), "unexpected response: {}", body);
    assert!(body.contains("text/html"));
    assert!(body.contains("TalentScout Hiring Assistant"));
    assert!(body.contains("/ws"));
    assert!(body.contains("const drafts = currentDrafts();"));
    assert!(body.contains("drafts[q.index] ?? q.answer"));

    server_handle.abort();
}
