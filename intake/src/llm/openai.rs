//! OpenAI-compatible Chat Completions client implementing [`LlmClient`].
//!
//! Works against any endpoint that speaks the OpenAI chat schema with bearer-token auth
//! (Groq by default, see [`env_config::DEFAULT_BASE_URL`]). One non-streaming call per turn;
//! no retry.

use async_trait::async_trait;
use tracing::{debug, trace};

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::LlmError;
use crate::llm::{LlmClient, LlmConnector, LlmResponse};
use crate::message::Message;

/// Chat Completions client.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    base_url: String,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client for `api_key` against `base_url` (trailing slash trimmed).
    pub fn new(api_key: &str, base_url: &str, model: impl Into<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.clone());
        Self {
            client: Client::with_config(config),
            base_url,
            model: model.into(),
            temperature: None,
        }
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => {
                    ChatCompletionRequestMessage::Assistant((s.as_str()).into())
                }
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        let request = args
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        debug!(
            trace_id = %trace_id,
            base_url = %self.base_url,
            model = %self.model,
            message_count = messages.len(),
            temperature = ?self.temperature,
            "chat completion create"
        );
        if let Ok(js) = serde_json::to_string(&request) {
            trace!(trace_id = %trace_id, request = %js, "chat completion request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| LlmError::Api(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(LlmError::EmptyResponse)?;
        trace!(trace_id = %trace_id, chars = content.len(), "chat completion response");
        Ok(LlmResponse { content })
    }
}

/// Builds [`ChatOpenAI`] clients from shared endpoint settings.
#[derive(Clone, Debug)]
pub struct OpenAiConnector {
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiConnector {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            temperature,
        }
    }

    pub fn from_settings(settings: &env_config::IntakeSettings) -> Self {
        Self::new(
            settings.base_url.clone(),
            settings.model.clone(),
            settings.temperature,
        )
    }
}

impl LlmConnector for OpenAiConnector {
    fn connect(&self, api_key: &str) -> Box<dyn LlmClient> {
        Box::new(
            ChatOpenAI::new(api_key, &self.base_url, self.model.clone())
                .with_temperature(self.temperature),
        )
    }
}
