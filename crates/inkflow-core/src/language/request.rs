//! Completion request types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A single text-in, text-out request to a language model.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    name = "CompletionRequestBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(private, name = "build_inner", error = "CompletionRequestError")
)]
pub struct CompletionRequest {
    /// System instruction sent ahead of the user prompt.
    #[builder(default)]
    pub preamble: Option<String>,
    /// The user prompt.
    pub prompt: String,
    /// Sampling temperature.
    #[builder(default)]
    pub temperature: Option<f64>,
    /// Upper bound on generated tokens.
    #[builder(default)]
    pub max_tokens: Option<u64>,
}

/// Error type for CompletionRequest builder.
pub type CompletionRequestError = derive_builder::UninitializedFieldError;

impl CompletionRequestBuilder {
    /// Build the request.
    pub fn build(self) -> Result<CompletionRequest, CompletionRequestError> {
        self.build_inner()
    }
}

impl CompletionRequest {
    /// Creates a request with only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            preamble: None,
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Create a builder for this request.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Number of characters in the prompt.
    pub fn prompt_chars(&self) -> usize {
        self.prompt.chars().count()
    }
}
