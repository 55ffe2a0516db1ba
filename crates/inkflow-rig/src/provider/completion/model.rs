//! Type-safe completion model references.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Reference to a completion/chat model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "model", rename_all = "snake_case")]
pub enum CompletionModel {
    /// OpenAI completion models.
    OpenAi(OpenAiCompletionModel),
    /// Anthropic models.
    Anthropic(AnthropicModel),
    /// Google Gemini completion models.
    Gemini(GeminiCompletionModel),
    /// Any model served by a local Ollama instance.
    #[cfg(feature = "ollama")]
    Ollama(String),
}

/// OpenAI completion models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpenAiCompletionModel {
    /// GPT-4o (multimodal flagship)
    #[strum(serialize = "gpt-4o")]
    Gpt4o,
    /// GPT-4o mini (fast, affordable)
    #[strum(serialize = "gpt-4o-mini")]
    Gpt4oMini,
    /// GPT-4 Turbo
    #[strum(serialize = "gpt-4-turbo")]
    Gpt4Turbo,
    /// GPT-3.5 Turbo
    #[strum(serialize = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

/// Anthropic models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AnthropicModel {
    /// Claude Opus 4 (most capable)
    #[strum(serialize = "claude-opus-4-20250514")]
    ClaudeOpus4,
    /// Claude Sonnet 4 (balanced)
    #[strum(serialize = "claude-sonnet-4-20250514")]
    ClaudeSonnet4,
    /// Claude Haiku 3.5 (fast)
    #[strum(serialize = "claude-3-5-haiku-20241022")]
    ClaudeHaiku35,
}

/// Google Gemini completion models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GeminiCompletionModel {
    /// Gemini 2.0 Flash (fast, multimodal)
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    /// Gemini 1.5 Pro (long context)
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
    /// Gemini 1.5 Flash (fast)
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
}

impl CompletionModel {
    /// Returns the model identifier string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenAi(m) => m.as_ref(),
            Self::Anthropic(m) => m.as_ref(),
            Self::Gemini(m) => m.as_ref(),
            #[cfg(feature = "ollama")]
            Self::Ollama(m) => m,
        }
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => "openai",
            Self::Anthropic(_) => "anthropic",
            Self::Gemini(_) => "gemini",
            #[cfg(feature = "ollama")]
            Self::Ollama(_) => "ollama",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_model_identifiers() {
        assert_eq!(
            OpenAiCompletionModel::from_str("gpt-4o-mini").ok(),
            Some(OpenAiCompletionModel::Gpt4oMini)
        );
        assert_eq!(
            AnthropicModel::from_str("claude-sonnet-4-20250514").ok(),
            Some(AnthropicModel::ClaudeSonnet4)
        );
        assert!(GeminiCompletionModel::from_str("gemini-9").is_err());
    }

    #[test]
    fn serializes_provider_tagged() {
        let model = CompletionModel::Anthropic(AnthropicModel::ClaudeHaiku35);
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["provider"], "anthropic");
        assert_eq!(model.as_str(), "claude-3-5-haiku-20241022");
        assert_eq!(model.provider_name(), "anthropic");
    }
}
