//! Language service wrapper with observability.
//!
//! This module provides a wrapper around provider implementations that adds
//! structured logging and timing to every call.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{CompletionRequest, LanguageProvider, TRACING_TARGET};
use crate::Result;

/// Language service wrapper with observability.
///
/// The inner provider is wrapped in `Arc` for cheap cloning. A single call is
/// made per request, with no retries.
#[derive(Clone)]
pub struct LanguageService {
    inner: Arc<dyn LanguageProvider>,
}

impl LanguageService {
    /// Create a new language service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: LanguageProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Create from a shared provider.
    pub fn from_arc(provider: Arc<dyn LanguageProvider>) -> Self {
        Self { inner: provider }
    }

    /// Name of the wrapped provider.
    pub fn provider_name(&self) -> &str {
        self.inner.name()
    }

    /// Sends a completion request to the wrapped provider.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let start = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            provider = self.inner.name(),
            prompt_chars = request.prompt_chars(),
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        let result = self.inner.complete(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(text) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    provider = self.inner.name(),
                    response_len = text.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Completion successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    provider = self.inner.name(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Completion failed"
                );
            }
        }

        result
    }
}

impl fmt::Debug for LanguageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageService")
            .field("provider", &self.inner.name())
            .finish()
    }
}
