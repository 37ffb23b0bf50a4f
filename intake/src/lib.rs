//! # Intake
//!
//! Core of the TalentScout hiring assistant: a chat-based intake that collects seven candidate
//! details, derives a short list of technical questions from the declared tech stack, and
//! replies through an OpenAI-compatible chat model (or a deterministic fallback when no model
//! is reachable).
//!
//! ## Main modules
//!
//! - [`extract`]: regex field extraction ([`extract_fields`], [`detect_tech_stack`]) and form
//!   validation helpers.
//! - [`stack`]: [`normalize_stack`] turns free-text stacks into lowercase tokens.
//! - [`questions`]: static question bank and [`pick_questions`].
//! - [`reply`]: [`ReplyGenerator`] (prompt assembly + one completion call, never fails) and
//!   [`fallback_reply`].
//! - [`llm`]: [`LlmClient`] / [`LlmConnector`] seams, [`ChatOpenAI`], [`MockLlm`].
//! - [`session`]: [`SessionState`], the per-candidate state every user action mutates.
//! - [`protocol`]: WebSocket message types ([`ClientRequest`], [`ServerResponse`]).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use intake::{CandidateField, MockLlm, ReplyGenerator, SessionState};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let generator = ReplyGenerator::new(Arc::new(MockLlm::replying("Welcome!")));
//! let mut session = SessionState::new("gsk_demo");
//! session.submit_form([(CandidateField::TechStack, "Python, Docker")]);
//! let turn = session.send_chat("Hi, I'm Ada", &generator).await.unwrap();
//! println!("{}", turn.reply);
//! for q in session.questions() {
//!     println!("- {}", q);
//! }
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod llm;
pub mod message;
pub mod profile;
pub mod protocol;
pub mod questions;
pub mod reply;
pub mod session;
pub mod stack;

pub use error::{LlmError, SessionError};
pub use extract::{detect_tech_stack, extract_fields, validate_email, validate_phone, ExtractedFields};
pub use llm::{ChatOpenAI, LlmClient, LlmConnector, LlmResponse, MockLlm, OpenAiConnector};
pub use message::Message;
pub use profile::{CandidateField, CandidateProfile};
pub use protocol::{ClientRequest, ServerResponse};
pub use questions::{pick_questions, FALLBACK_QUESTIONS, MAX_QUESTIONS};
pub use reply::{fallback_reply, Reply, ReplyGenerator, ReplySource};
pub use session::{
    is_exit_keyword, ChatTurn, FieldWarning, Phase, QuestionView, QuickReply, SessionSnapshot,
    SessionState, FAREWELL,
};
pub use stack::normalize_stack;
