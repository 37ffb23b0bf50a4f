//! Maps one [`ClientRequest`] onto the connection's [`SessionState`].
//!
//! Every successful action answers with a full session snapshot so the page can re-render
//! from a single frame. Rejected actions answer with an `error` carrying the request id and
//! leave the session untouched.

use intake::protocol::{ErrorResponse, PongResponse, SessionResponse};
use intake::{
    ClientRequest, FieldWarning, ReplyGenerator, ServerResponse, SessionError, SessionState,
};
use tracing::{debug, info_span, Instrument};

/// Runs the request inside a `request` span carrying its id.
pub(crate) async fn handle_request(
    req: ClientRequest,
    session: &mut SessionState,
    generator: &ReplyGenerator,
) -> ServerResponse {
    let span = info_span!("request", id = %req.id());
    apply(req, session, generator).instrument(span).await
}

async fn apply(
    req: ClientRequest,
    session: &mut SessionState,
    generator: &ReplyGenerator,
) -> ServerResponse {
    let id = req.id().to_string();
    debug!("request");
    let outcome: Result<(Option<String>, Vec<FieldWarning>), SessionError> = match req {
        ClientRequest::Ping(r) => return ServerResponse::Pong(PongResponse { id: r.id }),
        ClientRequest::Snapshot(_) => Ok((None, Vec::new())),
        ClientRequest::SubmitProfile(r) => Ok((None, session.submit_form(r.fields))),
        ClientRequest::Chat(r) => session
            .send_chat(&r.message, generator)
            .await
            .map(|turn| (Some(turn.reply), Vec::new())),
        ClientRequest::QuickReply(r) => session
            .send_quick_reply(r.reply, generator)
            .await
            .map(|turn| (Some(turn.reply), Vec::new())),
        ClientRequest::SaveAnswer(r) => session
            .save_answer(r.index, &r.answer)
            .map(|()| (None, Vec::new())),
        ClientRequest::SetApiKey(r) => {
            session.set_api_key(&r.api_key);
            Ok((None, Vec::new()))
        }
        ClientRequest::Reset(_) => {
            session.reset();
            Ok((None, Vec::new()))
        }
    };

    match outcome {
        Ok((reply, warnings)) => ServerResponse::Session(Box::new(SessionResponse {
            id,
            reply,
            warnings,
            session: session.snapshot(),
        })),
        Err(e) => ServerResponse::Error(ErrorResponse {
            id: Some(id),
            error: e.to_string(),
        }),
    }
}
