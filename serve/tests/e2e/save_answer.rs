use futures_util::StreamExt;
use intake::protocol::{SaveAnswerRequest, SubmitProfileRequest};
use intake::{CandidateField, ClientRequest, ServerResponse};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::timeout;
use tokio_tungstenite::connect_async;

use super::common;

fn save(id: &str, index: usize, answer: &str) -> ClientRequest {
    ClientRequest::SaveAnswer(SaveAnswerRequest {
        id: id.to_string(),
        index,
        answer: answer.to_string(),
    })
}

#[tokio::test]
async fn e2e_form_questions_and_answers() {
    let (addr, server_handle) = common::spawn_server_once().await;
    let (ws, _) = connect_async(common::ws_url(&addr)).await.unwrap();
    let (mut write, mut read) = ws.split();

    let mut fields = BTreeMap::new();
    fields.insert(CandidateField::FullName, "Linus".to_string());
    fields.insert(CandidateField::PhoneNumber, "12".to_string());
    fields.insert(CandidateField::TechStack, "Git and Kubernetes and AWS".to_string());
    let (resp, _) = common::send_and_recv(
        &mut write,
        &mut read,
        &ClientRequest::SubmitProfile(SubmitProfileRequest {
            id: "form".into(),
            fields,
        }),
    )
    .await
    .unwrap();
    let resp = common::expect_session(resp);
    assert_eq!(resp.warnings.len(), 1);
    assert_eq!(resp.warnings[0].field, CandidateField::PhoneNumber);
    assert_eq!(resp.session.profile.get(CandidateField::PhoneNumber), Some("12"));
    assert_eq!(resp.session.questions.len(), 5);
    assert!(resp.session.messages.is_empty());

    let (resp, _) = common::send_and_recv(&mut write, &mut read, &save("a0", 0, "   "))
        .await
        .unwrap();
    match resp {
        ServerResponse::Error(e) => assert_eq!(e.error, "please enter an answer first"),
        other => panic!("expected error for blank answer, got {:?}", other),
    }

    let (resp, _) = common::send_and_recv(
        &mut write,
        &mut read,
        &save("a1", 0, "Rebase locally, then resolve hunk by hunk."),
    )
    .await
    .unwrap();
    let session = common::expect_session(resp).session;
    assert_eq!(session.answered, 1);
    assert_eq!(session.questions[0].answer_words, 7);
    assert!(!session.all_answered);

    let (resp, _) = common::send_and_recv(&mut write, &mut read, &save("a9", 9, "x"))
        .await
        .unwrap();
    assert!(matches!(resp, ServerResponse::Error(_)));

    drop(write);
    drop(read);
    let _ = timeout(Duration::from_secs(5), server_handle).await;
}
