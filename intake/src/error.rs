//! Error types for the LLM client and session operations.
//!
//! Neither surfaces as a fatal error: [`LlmError`] is always converted to a fallback reply by
//! the reply generator, and [`SessionError`] becomes a warning for the presentation layer.

use thiserror::Error;

/// Chat-completion call failure.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured for the session.
    #[error("no API key configured")]
    MissingApiKey,

    /// Request could not be built (e.g. invalid parameters).
    #[error("request build failed: {0}")]
    Request(String),

    /// Network or service error returned by the API.
    #[error("chat completion API error: {0}")]
    Api(String),

    /// The service answered without usable content.
    #[error("chat completion returned no content")]
    EmptyResponse,
}

/// A session action that was rejected; the session state is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The candidate already ended the conversation; only reset is accepted.
    #[error("conversation has ended; start a new session to continue")]
    Ended,

    /// Answer text was empty after trimming.
    #[error("please enter an answer first")]
    EmptyAnswer,

    /// Answer index does not refer to a generated question.
    #[error("no technical question at index {0}")]
    UnknownQuestion(usize),

    /// Quick replies are only offered before the first message.
    #[error("quick replies are only available before the conversation starts")]
    QuickReplyUnavailable,
}
