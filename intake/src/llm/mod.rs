//! LLM client abstraction for reply generation.
//!
//! The reply generator depends on a callable that returns assistant text for a list of
//! messages. [`LlmClient`] is that seam; [`ChatOpenAI`] talks to any OpenAI-compatible
//! chat-completion endpoint and [`MockLlm`] serves tests.
//!
//! The API key belongs to the session and can change at runtime, so clients are not built
//! once at startup: an [`LlmConnector`] turns the current key into a client on each turn.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::{ChatOpenAI, OpenAiConnector};

use async_trait::async_trait;

use crate::error::LlmError;
use crate::message::Message;

/// Response from one chat completion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
}

/// LLM client: given messages, returns assistant text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion over `messages` (system first, then history, then the new turn).
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError>;
}

/// Builds an [`LlmClient`] for a session's API key.
///
/// Implementations must not perform I/O here; connecting happens in [`LlmClient::invoke`].
pub trait LlmConnector: Send + Sync {
    fn connect(&self, api_key: &str) -> Box<dyn LlmClient>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubLlm {
        content: String,
    }

    #[async_trait]
    impl LlmClient for StubLlm {
        async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse {
                content: self.content.clone(),
            })
        }
    }

    struct StubConnector;

    impl LlmConnector for StubConnector {
        fn connect(&self, api_key: &str) -> Box<dyn LlmClient> {
            Box::new(StubLlm {
                content: format!("key={}", api_key),
            })
        }
    }

    #[tokio::test]
    async fn connector_passes_key_to_client() {
        let client = StubConnector.connect("gsk_1");
        let out = client.invoke(&[Message::user("hi")]).await.unwrap();
        assert_eq!(out.content, "key=gsk_1");
    }
}
