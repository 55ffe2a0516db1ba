//! Configuration for the language model backend.

use std::str::FromStr;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::provider::{
    AnthropicModel, ApiKeyCredentials, CompletionModel, CompletionProvider, Credentials,
    GeminiCompletionModel, OpenAiCompletionModel,
};
#[cfg(feature = "ollama")]
use crate::provider::OllamaCredentials;
use crate::{Error, Result};

/// Which completion backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
    Gemini,
    #[cfg(feature = "ollama")]
    Ollama,
}

/// Configuration for the completion backend.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct RigConfig {
    /// Completion provider (openai, anthropic, gemini, ollama).
    #[cfg_attr(
        feature = "config",
        arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "openai")
    )]
    pub provider: ProviderKind,

    /// Model identifier; each provider has its own default.
    #[cfg_attr(feature = "config", arg(long = "llm-model", env = "LLM_MODEL"))]
    pub model: Option<String>,

    /// OpenAI API key.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAI_API_KEY", hide_env_values = true)
    )]
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// Anthropic API key.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)
    )]
    #[serde(skip_serializing)]
    pub anthropic_api_key: Option<String>,

    /// Google Gemini API key.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "GEMINI_API_KEY", hide_env_values = true)
    )]
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,

    /// Ollama base URL.
    #[cfg(feature = "ollama")]
    #[cfg_attr(
        feature = "config",
        arg(
            long,
            env = "OLLAMA_BASE_URL",
            default_value = "http://localhost:11434"
        )
    )]
    pub ollama_base_url: String,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            openai_api_key: None,
            anthropic_api_key: None,
            gemini_api_key: None,
            #[cfg(feature = "ollama")]
            ollama_base_url: "http://localhost:11434".to_string(),
        }
    }
}

impl RigConfig {
    /// Resolves the configured model, using the provider default when unset.
    pub fn completion_model(&self) -> Result<CompletionModel> {
        let model = self.model.as_deref();
        let parsed = match self.provider {
            ProviderKind::OpenAi => {
                CompletionModel::OpenAi(parse_or(model, OpenAiCompletionModel::Gpt4oMini)?)
            }
            ProviderKind::Anthropic => {
                CompletionModel::Anthropic(parse_or(model, AnthropicModel::ClaudeSonnet4)?)
            }
            ProviderKind::Gemini => {
                CompletionModel::Gemini(parse_or(model, GeminiCompletionModel::Gemini20Flash)?)
            }
            #[cfg(feature = "ollama")]
            ProviderKind::Ollama => {
                CompletionModel::Ollama(model.unwrap_or("llama3.2").to_string())
            }
        };
        Ok(parsed)
    }

    /// Builds credentials for the configured provider.
    pub fn credentials(&self) -> Result<Credentials> {
        let credentials = match self.provider {
            ProviderKind::OpenAi => {
                Credentials::OpenAi(require_key(&self.openai_api_key, "OPENAI_API_KEY")?)
            }
            ProviderKind::Anthropic => {
                Credentials::Anthropic(require_key(&self.anthropic_api_key, "ANTHROPIC_API_KEY")?)
            }
            ProviderKind::Gemini => {
                Credentials::Gemini(require_key(&self.gemini_api_key, "GEMINI_API_KEY")?)
            }
            #[cfg(feature = "ollama")]
            ProviderKind::Ollama => Credentials::Ollama(OllamaCredentials {
                base_url: self.ollama_base_url.clone(),
            }),
        };
        Ok(credentials)
    }

    /// Creates the completion provider described by this configuration.
    pub fn completion_provider(&self) -> Result<CompletionProvider> {
        CompletionProvider::connect(self.completion_model()?, self.credentials()?)
    }
}

impl std::fmt::Debug for RigConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("RigConfig");
        debug
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"));
        #[cfg(feature = "ollama")]
        debug.field("ollama_base_url", &self.ollama_base_url);
        debug.finish()
    }
}

fn parse_or<T: FromStr>(model: Option<&str>, default: T) -> Result<T> {
    match model {
        None => Ok(default),
        Some(name) => {
            T::from_str(name).map_err(|_| Error::config(format!("unsupported model: {name}")))
        }
    }
}

fn require_key(key: &Option<String>, env: &str) -> Result<ApiKeyCredentials> {
    match key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Ok(ApiKeyCredentials::new(key)),
        _ => Err(Error::config(format!("{env} is required"))),
    }
}
