//! WebSocket request/response types.
//!
//! Every frame is one JSON object tagged with `"type"`. Requests carry a client-chosen `id`
//! which is echoed on the matching response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::CandidateField;
use crate::session::{FieldWarning, QuickReply, SessionSnapshot};

// -----------------------------------------------------------------------------
// Requests (client → server)
// -----------------------------------------------------------------------------

/// Form submission. Blank values are ignored; the rest overwrite stored values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitProfileRequest {
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<CandidateField, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub id: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickReplyRequest {
    pub id: String,
    pub reply: QuickReply,
}

/// Save (or replace) the answer to question `index` (0-based).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveAnswerRequest {
    pub id: String,
    pub index: usize,
    pub answer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetApiKeyRequest {
    pub id: String,
    pub api_key: String,
}

/// Requests that carry nothing but an id: `reset`, `snapshot`, `ping`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

/// Client-to-server request envelope.
///
/// Each variant maps to a JSON object with `"type": "<variant_name>"`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientRequest {
    SubmitProfile(SubmitProfileRequest),
    Chat(ChatRequest),
    QuickReply(QuickReplyRequest),
    SaveAnswer(SaveAnswerRequest),
    SetApiKey(SetApiKeyRequest),
    Reset(IdRequest),
    Snapshot(IdRequest),
    Ping(IdRequest),
}

impl ClientRequest {
    pub fn id(&self) -> &str {
        match self {
            Self::SubmitProfile(r) => &r.id,
            Self::Chat(r) => &r.id,
            Self::QuickReply(r) => &r.id,
            Self::SaveAnswer(r) => &r.id,
            Self::SetApiKey(r) => &r.id,
            Self::Reset(r) | Self::Snapshot(r) | Self::Ping(r) => &r.id,
        }
    }
}

// -----------------------------------------------------------------------------
// Responses (server → client)
// -----------------------------------------------------------------------------

/// State after a successful request, with the assistant reply when one was produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FieldWarning>,
    pub session: SessionSnapshot,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongResponse {
    pub id: String,
}

/// Error response for any failed request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub error: String,
}

/// Server-to-client response envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerResponse {
    Session(Box<SessionResponse>),
    Pong(PongResponse),
    Error(ErrorResponse),
}
