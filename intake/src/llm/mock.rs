//! Mock LLM and connector for tests.
//!
//! [`MockLlm`] returns a fixed reply (or a fixed failure) and records every prompt it receives,
//! so tests can assert on what the reply generator sent. It is its own [`LlmConnector`]:
//! connecting hands out clones that share the same call log.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::LlmError;
use crate::llm::{LlmClient, LlmConnector, LlmResponse};
use crate::message::Message;

#[derive(Clone, Debug)]
enum Behaviour {
    Reply(String),
    Fail,
    Empty,
}

/// Mock LLM: fixed assistant text, failure, or empty content.
#[derive(Clone, Debug)]
pub struct MockLlm {
    behaviour: Behaviour,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
    keys: Arc<Mutex<Vec<String>>>,
}

impl MockLlm {
    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(Mutex::new(Vec::new())),
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answers with `content`.
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reply(content.into()))
    }

    /// Always fails with an API error (like an unreachable service).
    pub fn failing() -> Self {
        Self::with_behaviour(Behaviour::Fail)
    }

    /// Always returns an empty response.
    pub fn empty() -> Self {
        Self::with_behaviour(Behaviour::Empty)
    }

    /// Prompts received so far, one entry per call.
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// API keys passed to [`LlmConnector::connect`], in order.
    pub fn connected_keys(&self) -> Vec<String> {
        self.keys.lock().map(|k| k.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }
        match &self.behaviour {
            Behaviour::Reply(content) => Ok(LlmResponse {
                content: content.clone(),
            }),
            Behaviour::Fail => Err(LlmError::Api("mock failure".to_string())),
            Behaviour::Empty => Ok(LlmResponse::default()),
        }
    }
}

impl LlmConnector for MockLlm {
    fn connect(&self, api_key: &str) -> Box<dyn LlmClient> {
        if let Ok(mut keys) = self.keys.lock() {
            keys.push(api_key.to_string());
        }
        Box::new(self.clone())
    }
}
