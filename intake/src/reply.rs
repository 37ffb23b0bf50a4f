//! Reply generation: prompt assembly, one chat-completion call, deterministic fallback.
//!
//! [`ReplyGenerator::respond`] is total. A missing key, an API error, or an empty completion
//! all produce [`fallback_reply`]; the cause is logged and never returned.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::LlmError;
use crate::llm::{LlmConnector, OpenAiConnector};
use crate::message::Message;
use crate::profile::CandidateProfile;

/// Persona and goals for the assistant.
pub const SYSTEM_PROMPT: &str = "\
You are TalentScout, a friendly hiring assistant for a tech recruitment agency. Goals:
- Be warm, encouraging, and conversational; use emojis sparingly.
- Greet, collect candidate details (name, email, phone, years of experience, desired roles, current location, tech stack).
- After tech stack is provided, generate tailored technical questions (3-5 total) across the declared stack.
- Celebrate small wins (e.g., \"Great, got your email! ✓\").
- Keep context of prior messages; stay on-purpose. If unsure, ask a clarifying question.
- Exit and thank the candidate when they send a conversation-ending keyword: bye, exit, quit, stop, thanks.
- If input is unclear, respond with a short fallback asking for clarification.
";

/// Header of the captured-details block appended to the system prompt.
pub const CAPTURED_HEADER: &str = "[ALREADY CAPTURED - do NOT ask for these again]";

pub const COMPLETE_REPLY: &str =
    "Great, I have all your details! Check the technical questions below, or type 'bye' when done.";

/// Where the reply text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplySource {
    Model,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// Lists the missing fields, or [`COMPLETE_REPLY`] when nothing is missing.
pub fn fallback_reply(profile: &CandidateProfile) -> String {
    let missing = profile.missing();
    if missing.is_empty() {
        return COMPLETE_REPLY.to_string();
    }
    let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    format!(
        "Got it! I still need: {}. Could you share those?",
        names.join(", ")
    )
}

/// Builds prompts and calls the model through an [`LlmConnector`].
#[derive(Clone)]
pub struct ReplyGenerator {
    connector: Arc<dyn LlmConnector>,
    history_turns: usize,
}

impl ReplyGenerator {
    pub fn new(connector: Arc<dyn LlmConnector>) -> Self {
        Self {
            connector,
            history_turns: env_config::DEFAULT_HISTORY_TURNS,
        }
    }

    /// OpenAI-compatible generator configured from settings (endpoint, model, history window).
    pub fn from_settings(settings: &env_config::IntakeSettings) -> Self {
        Self::new(Arc::new(OpenAiConnector::from_settings(settings)))
            .with_history_turns(settings.history_turns)
    }

    /// How many trailing transcript messages are forwarded to the model.
    pub fn with_history_turns(mut self, turns: usize) -> Self {
        self.history_turns = turns;
        self
    }

    /// System prompt (plus captured details), the last `history_turns` of `history`, then
    /// `user_text` as the final user message.
    pub fn build_prompt(
        &self,
        profile: &CandidateProfile,
        history: &[Message],
        user_text: &str,
    ) -> Vec<Message> {
        let mut system = SYSTEM_PROMPT.to_string();
        if !profile.is_empty() {
            system.push_str("\n\n");
            system.push_str(CAPTURED_HEADER);
            system.push('\n');
            for (field, value) in profile.iter() {
                system.push_str(&format!("- {}: {}\n", field.label(), value));
            }
        }

        let start = history.len().saturating_sub(self.history_turns);
        let mut messages = Vec::with_capacity(history.len() - start + 2);
        messages.push(Message::system(system));
        messages.extend(
            history[start..]
                .iter()
                .filter(|m| !matches!(m, Message::System(_)))
                .cloned(),
        );
        messages.push(Message::user(user_text));
        messages
    }

    /// Generates the assistant reply for `user_text`. Never fails.
    pub async fn respond(
        &self,
        api_key: &str,
        profile: &CandidateProfile,
        history: &[Message],
        user_text: &str,
    ) -> Reply {
        match self.try_model(api_key, profile, history, user_text).await {
            Ok(text) => Reply {
                text,
                source: ReplySource::Model,
            },
            Err(LlmError::MissingApiKey) => {
                debug!("no API key; using fallback reply");
                Reply {
                    text: fallback_reply(profile),
                    source: ReplySource::Fallback,
                }
            }
            Err(e) => {
                warn!(error = %e, "chat completion failed; using fallback reply");
                Reply {
                    text: fallback_reply(profile),
                    source: ReplySource::Fallback,
                }
            }
        }
    }

    async fn try_model(
        &self,
        api_key: &str,
        profile: &CandidateProfile,
        history: &[Message],
        user_text: &str,
    ) -> Result<String, LlmError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        let prompt = self.build_prompt(profile, history, user_text);
        let client = self.connector.connect(api_key);
        let response = client.invoke(&prompt).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
