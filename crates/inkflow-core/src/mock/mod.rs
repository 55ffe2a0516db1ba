//! Mock language provider for testing.
//!
//! This module is only available when the `mock` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! inkflow-core = { version = "...", features = ["mock"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use inkflow_core::mock::MockLanguageProvider;
//!
//! let provider = MockLanguageProvider::default()
//!     .with_reply("```mermaid\nflowchart TD\n A-->B\n```");
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::language::{CompletionRequest, LanguageProvider};
use crate::{Error, Result};

/// Reply used when no scripted reply is queued.
pub const DEFAULT_MOCK_REPLY: &str = "flowchart TD\n    A[Request] --> B[Mock response]";

/// A scripted reply for the next call.
#[derive(Debug, Clone)]
enum Scripted {
    Text(String),
    Failure(String),
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<Scripted>,
    requests: Vec<CompletionRequest>,
}

/// Language provider that answers from a queue of scripted replies.
///
/// Clones share the same queue and call log, so a test can keep a handle
/// after moving the provider into a service.
#[derive(Debug, Clone, Default)]
pub struct MockLanguageProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockLanguageProvider {
    /// Creates a provider with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Scripted::Text(text.into()));
        self
    }

    /// Queues a failing call with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Scripted::Failure(message.into()));
        self
    }

    /// Returns every request received so far.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    fn push(&self, reply: Scripted) {
        // Only called while building, before the provider is shared.
        if let Ok(mut state) = self.state.try_lock() {
            state.replies.push_back(reply);
        }
    }
}

#[async_trait::async_trait]
impl LanguageProvider for MockLanguageProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let mut state = self.state.lock().await;
        state.requests.push(request.clone());

        match state.replies.pop_front() {
            Some(Scripted::Text(text)) => Ok(text),
            Some(Scripted::Failure(message)) => {
                Err(Error::external_error().with_message(message))
            }
            None => Ok(DEFAULT_MOCK_REPLY.to_owned()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::language::LanguageService;

    #[tokio::test]
    async fn replays_queue_in_order() {
        let provider = MockLanguageProvider::new()
            .with_reply("first")
            .with_failure("boom")
            .with_reply("second");
        let service = LanguageService::new(provider.clone());
        let request = CompletionRequest::new("prompt");

        assert_eq!(service.complete(&request).await.unwrap(), "first");

        let error = service.complete(&request).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ExternalError);
        assert_eq!(error.message(), "boom");

        assert_eq!(service.complete(&request).await.unwrap(), "second");
        assert_eq!(service.complete(&request).await.unwrap(), DEFAULT_MOCK_REPLY);
        assert_eq!(provider.call_count().await, 4);
    }

    #[tokio::test]
    async fn records_requests() {
        let provider = MockLanguageProvider::new();
        let service = LanguageService::new(provider.clone());
        assert_eq!(service.provider_name(), "mock");

        let request = CompletionRequest::builder()
            .with_prompt("draw")
            .with_temperature(0.3)
            .build()
            .unwrap();
        service.complete(&request).await.unwrap();

        assert_eq!(provider.requests().await, vec![request]);
    }
}
