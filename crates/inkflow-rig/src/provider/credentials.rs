//! Shared credential types for AI providers.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// API key credentials for AI providers.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiKeyCredentials {
    /// API key.
    pub api_key: String,
}

impl ApiKeyCredentials {
    /// Wraps an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Ollama credentials (local, no API key required).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaCredentials {
    /// Base URL of the Ollama server.
    pub base_url: String,
}

/// Unified credentials for all completion providers.
#[derive(Debug, Clone, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "provider", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Credentials {
    /// OpenAI credentials.
    OpenAi(ApiKeyCredentials),
    /// Anthropic credentials.
    Anthropic(ApiKeyCredentials),
    /// Google Gemini credentials.
    Gemini(ApiKeyCredentials),
    /// Ollama credentials.
    #[cfg(feature = "ollama")]
    Ollama(OllamaCredentials),
}

impl Credentials {
    /// Returns the provider name as a string.
    pub fn provider(&self) -> &'static str {
        self.into()
    }
}
