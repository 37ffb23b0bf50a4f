//! Per-session intake state and the user actions that mutate it.
//!
//! One [`SessionState`] exists per connected candidate (per WebSocket connection in `serve`,
//! per process in the CLI REPL). It is owned by its handler and passed by `&mut` into every
//! action; nothing here is shared or global.
//!
//! Conversation phases: collecting fields → (all seven fields set) → showing questions →
//! (exit keyword) → ended. The exit keyword ends the conversation from any phase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::extract::{detect_tech_stack, extract_fields, validate_email, validate_phone};
use crate::message::Message;
use crate::profile::{CandidateField, CandidateProfile};
use crate::questions::pick_questions;
use crate::reply::{ReplyGenerator, ReplySource};
use crate::stack::normalize_stack;

/// Whole-message keywords (trimmed, case-insensitive) that end the conversation.
pub const EXIT_KEYWORDS: [&str; 6] = ["bye", "exit", "quit", "stop", "thanks", "thank you"];

pub const FAREWELL: &str =
    "Thanks for your time! 🎉 We will review your profile and reach out soon. Best of luck!";

/// True when the entire trimmed message is an exit keyword ("bye for now" is not).
pub fn is_exit_keyword(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&normalized.as_str())
}

/// Conversation phase, derived from the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    CollectingFields,
    ShowingQuestions,
    Ended,
}

/// Canned starter prompts offered before the first message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReply {
    ShareInfo,
    TechStack,
    WhatDoYouNeed,
}

impl QuickReply {
    pub const ALL: [QuickReply; 3] = [Self::ShareInfo, Self::TechStack, Self::WhatDoYouNeed];

    /// Message sent on the candidate's behalf.
    pub fn message(self) -> &'static str {
        match self {
            Self::ShareInfo => "I'd like to share my details",
            Self::TechStack => "Let me tell you about my tech stack",
            Self::WhatDoYouNeed => "What information do you need from me?",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShareInfo => "👤 Share my info",
            Self::TechStack => "💻 My tech stack",
            Self::WhatDoYouNeed => "❓ What do you need?",
        }
    }
}

/// Non-blocking notice about a submitted form value; the value is stored regardless.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWarning {
    pub field: CandidateField,
    pub message: String,
}

/// Outcome of one chat action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    /// Assistant text appended to the transcript (reply or farewell).
    pub reply: String,
    /// `None` for the farewell, which involves no reply generation.
    pub source: Option<ReplySource>,
    /// Fields newly captured from this message.
    pub captured: Vec<CandidateField>,
    /// True when this turn generated the question set.
    pub questions_generated: bool,
    pub ended: bool,
}

/// One technical question with its saved answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub index: usize,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub answer_words: usize,
}

/// Serializable view of a session for the presentation layer. Never contains the API key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub profile: CandidateProfile,
    pub filled: usize,
    pub total_fields: usize,
    pub missing: Vec<CandidateField>,
    pub messages: Vec<Message>,
    pub questions: Vec<QuestionView>,
    pub answered: usize,
    pub all_answered: bool,
    pub quick_replies_available: bool,
    pub api_key_set: bool,
}

/// State of one candidate's intake session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    profile: CandidateProfile,
    transcript: Vec<Message>,
    questions: Vec<String>,
    answers: BTreeMap<usize, String>,
    ended: bool,
    api_key: String,
    default_api_key: String,
}

impl SessionState {
    /// Fresh session whose API key (and the key restored on reset) is `default_api_key`.
    pub fn new(default_api_key: impl Into<String>) -> Self {
        let default_api_key = default_api_key.into();
        Self {
            api_key: default_api_key.clone(),
            default_api_key,
            ..Default::default()
        }
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn phase(&self) -> Phase {
        if self.ended {
            Phase::Ended
        } else if self.profile.is_complete() {
            Phase::ShowingQuestions
        } else {
            Phase::CollectingFields
        }
    }

    /// Replaces the session's API key (empty switches to fallback replies).
    pub fn set_api_key(&mut self, api_key: &str) {
        self.api_key = api_key.trim().to_string();
    }

    /// Drops everything and starts over with the configured default key.
    pub fn reset(&mut self) {
        info!("session reset");
        *self = Self::new(std::mem::take(&mut self.default_api_key));
    }

    /// Applies a form submission: every non-blank value overwrites the stored one. Returns
    /// format warnings for email and phone values; warned values are still saved.
    pub fn submit_form<I, S>(&mut self, entries: I) -> Vec<FieldWarning>
    where
        I: IntoIterator<Item = (CandidateField, S)>,
        S: AsRef<str>,
    {
        let mut warnings = Vec::new();
        for (field, value) in entries {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            if let Some(message) = format_warning(field, value) {
                warnings.push(FieldWarning { field, message });
            }
            self.profile.set(field, value);
        }
        self.ensure_questions();
        debug!(filled = self.profile.filled_count(), "form submitted");
        warnings
    }

    /// Handles one free-text chat message.
    ///
    /// An exit keyword appends the farewell and ends the session. Otherwise extracted fields
    /// fill gaps (never overwrite), a "tech stack: ..." phrase overwrites the stack, the reply
    /// is generated from the transcript *before* this message, and questions are derived once
    /// the stack is known.
    pub async fn send_chat(
        &mut self,
        text: &str,
        generator: &ReplyGenerator,
    ) -> Result<ChatTurn, SessionError> {
        if self.ended {
            return Err(SessionError::Ended);
        }
        if is_exit_keyword(text) {
            self.transcript.push(Message::user(text));
            self.transcript.push(Message::assistant(FAREWELL));
            self.ended = true;
            info!("conversation ended by exit keyword");
            return Ok(ChatTurn {
                reply: FAREWELL.to_string(),
                source: None,
                captured: Vec::new(),
                questions_generated: false,
                ended: true,
            });
        }

        let history_len = self.transcript.len();
        self.transcript.push(Message::user(text));

        let mut captured = Vec::new();
        for (field, value) in extract_fields(text).into_pairs() {
            if self.profile.set_if_absent(field, &value) {
                captured.push(field);
            }
        }
        if let Some(stack) = detect_tech_stack(text) {
            if self.profile.set(CandidateField::TechStack, &stack) {
                captured.push(CandidateField::TechStack);
            }
        }
        if !captured.is_empty() {
            debug!(?captured, "fields captured from chat");
        }

        let reply = generator
            .respond(
                &self.api_key,
                &self.profile,
                &self.transcript[..history_len],
                text,
            )
            .await;
        self.transcript.push(Message::assistant(reply.text.clone()));
        let questions_generated = self.ensure_questions();

        Ok(ChatTurn {
            reply: reply.text,
            source: Some(reply.source),
            captured,
            questions_generated,
            ended: false,
        })
    }

    /// Sends a canned starter prompt. Only offered while the transcript is empty.
    pub async fn send_quick_reply(
        &mut self,
        quick: QuickReply,
        generator: &ReplyGenerator,
    ) -> Result<ChatTurn, SessionError> {
        if !self.quick_replies_available() {
            return Err(SessionError::QuickReplyUnavailable);
        }
        self.send_chat(quick.message(), generator).await
    }

    pub fn quick_replies_available(&self) -> bool {
        !self.ended && self.transcript.is_empty()
    }

    /// Derives the question set from the tech stack, at most once. Returns whether the set
    /// was generated by this call.
    pub fn ensure_questions(&mut self) -> bool {
        if !self.questions.is_empty() {
            return false;
        }
        let Some(stack) = self.profile.get(CandidateField::TechStack) else {
            return false;
        };
        let tokens = normalize_stack(stack);
        self.questions = pick_questions(&tokens);
        info!(count = self.questions.len(), ?tokens, "technical questions selected");
        true
    }

    /// Saves the trimmed answer for question `index`, replacing an earlier one.
    pub fn save_answer(&mut self, index: usize, answer: &str) -> Result<(), SessionError> {
        if index >= self.questions.len() {
            return Err(SessionError::UnknownQuestion(index));
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(SessionError::EmptyAnswer);
        }
        self.answers.insert(index, answer.to_string());
        Ok(())
    }

    pub fn all_answered(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() == self.questions.len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let answer = self.answers.get(&index).cloned();
                QuestionView {
                    index,
                    question: question.clone(),
                    answer_words: answer
                        .as_deref()
                        .map(|a| a.split_whitespace().count())
                        .unwrap_or(0),
                    answer,
                }
            })
            .collect();
        SessionSnapshot {
            phase: self.phase(),
            profile: self.profile.clone(),
            filled: self.profile.filled_count(),
            total_fields: CandidateField::ALL.len(),
            missing: self.profile.missing(),
            messages: self.transcript.clone(),
            questions,
            answered: self.answers.len(),
            all_answered: self.all_answered(),
            quick_replies_available: self.quick_replies_available(),
            api_key_set: !self.api_key.is_empty(),
        }
    }
}

fn format_warning(field: CandidateField, value: &str) -> Option<String> {
    match field {
        CandidateField::EmailAddress if !validate_email(value) => {
            Some(format!("'{}' does not look like an email address", value))
        }
        CandidateField::PhoneNumber if !validate_phone(value) => {
            Some("phone numbers should have 10 to 15 digits".to_string())
        }
        _ => None,
    }
}
