/*!
 * Mock provider implementation for testing.
 *
 * Returns queued canned responses and can be told to fail, so the translation
 * service's passthrough and count-reconciliation behavior can be exercised
 * without any network access.
 */

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::openai::{ChatRequest, ChatResponse};

/// Chat provider that replays queued responses
#[derive(Debug, Default)]
pub struct MockProvider {
    /// Responses handed out in FIFO order; empty queue echoes the request
    responses: Mutex<VecDeque<String>>,
    /// When set, every call fails with a connection error
    fail: Mutex<bool>,
    /// Requests seen, for assertions on prompt construction
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned completion text
    pub fn push_response(&self, content: impl Into<String>) {
        self.responses.lock().unwrap().push_back(content.into());
    }

    /// Make all subsequent calls fail
    pub fn set_failing(&self, failing: bool) {
        *self.fail.lock().unwrap() = failing;
    }

    /// Requests recorded so far
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        if *self.fail.lock().unwrap() {
            return Err(ProviderError::ConnectionError(
                "mock provider set to fail".to_string(),
            ));
        }

        let queued = self.responses.lock().unwrap().pop_front();
        let content = queued.unwrap_or_else(|| {
            // Echo the last user message when nothing is queued
            request
                .messages()
                .iter()
                .rev()
                .find(|m| m.role == "user")
                .map(|m| m.content.clone())
                .unwrap_or_default()
        });

        self.requests.lock().unwrap().push(request);

        Ok(ChatResponse::from_text(content))
    }
}
