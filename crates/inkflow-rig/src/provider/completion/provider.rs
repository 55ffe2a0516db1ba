//! Completion provider abstraction.

use std::sync::Arc;

use inkflow_core::language::{CompletionRequest, LanguageProvider};
#[cfg(feature = "ollama")]
use rig::client::Nothing;
use rig::completion::{AssistantContent, CompletionError, CompletionModel as RigCompletionModel};
use rig::one_or_many::OneOrMany;
use rig::prelude::CompletionClient;
#[cfg(feature = "ollama")]
use rig::providers::ollama;
use rig::providers::{anthropic, gemini, openai};

use super::super::credentials::Credentials;
use super::model::CompletionModel;
use crate::{Error, Result, TRACING_TARGET};

/// Completion provider that wraps different rig completion model implementations.
///
/// This is a cheaply cloneable wrapper around an `Arc<CompletionService>`.
#[derive(Clone)]
pub struct CompletionProvider(Arc<CompletionService>);

pub(crate) enum CompletionService {
    OpenAi {
        model: openai::CompletionModel,
        model_name: String,
    },
    Anthropic {
        model: anthropic::completion::CompletionModel,
        model_name: String,
    },
    Gemini {
        model: gemini::completion::CompletionModel,
        model_name: String,
    },
    #[cfg(feature = "ollama")]
    Ollama {
        client: ollama::Client,
        model_name: String,
    },
}

impl CompletionProvider {
    /// Creates a provider for `model` authenticated with `credentials`.
    ///
    /// Fails when the credentials belong to a different provider than the model.
    pub fn connect(model: CompletionModel, credentials: Credentials) -> Result<Self> {
        let inner = match (credentials, model) {
            (Credentials::OpenAi(c), CompletionModel::OpenAi(m)) => {
                let client = openai::Client::new(&c.api_key)
                    .map_err(|e| Error::provider("openai", e))?
                    .completions_api();
                CompletionService::OpenAi {
                    model: client.completion_model(m.as_ref()),
                    model_name: m.as_ref().to_string(),
                }
            }
            (Credentials::Anthropic(c), CompletionModel::Anthropic(m)) => {
                let client = anthropic::Client::new(&c.api_key)
                    .map_err(|e| Error::provider("anthropic", e))?;
                CompletionService::Anthropic {
                    model: client.completion_model(m.as_ref()),
                    model_name: m.as_ref().to_string(),
                }
            }
            (Credentials::Gemini(c), CompletionModel::Gemini(m)) => {
                let client =
                    gemini::Client::new(&c.api_key).map_err(|e| Error::provider("gemini", e))?;
                CompletionService::Gemini {
                    model: client.completion_model(m.as_ref()),
                    model_name: m.as_ref().to_string(),
                }
            }
            #[cfg(feature = "ollama")]
            (Credentials::Ollama(c), CompletionModel::Ollama(model_name)) => {
                let client = ollama::Client::builder()
                    .api_key(Nothing)
                    .base_url(&c.base_url)
                    .build()
                    .map_err(|e| Error::provider("ollama", e))?;
                CompletionService::Ollama { client, model_name }
            }
            (credentials, model) => {
                return Err(Error::config(format!(
                    "mismatched credentials ({}) and model provider ({})",
                    credentials.provider(),
                    model.provider_name()
                )));
            }
        };

        tracing::info!(
            target: TRACING_TARGET,
            provider = inner.provider_name(),
            model = inner.model_name(),
            "Completion provider initialized"
        );

        Ok(Self(Arc::new(inner)))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        self.0.model_name()
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        self.0.provider_name()
    }

    /// Sends a single completion request and returns the concatenated text.
    async fn send(&self, request: &CompletionRequest) -> Result<String> {
        let map_err = |e: CompletionError| Error::provider(self.model_name(), e);

        let result = match self.0.as_ref() {
            CompletionService::OpenAi { model, .. } => send_with(model, request).await,
            CompletionService::Anthropic { model, .. } => send_with(model, request).await,
            CompletionService::Gemini { model, .. } => send_with(model, request).await,
            #[cfg(feature = "ollama")]
            CompletionService::Ollama { client, model_name } => {
                let model = client.completion_model(model_name);
                send_with(&model, request).await
            }
        };

        result.map_err(map_err)
    }
}

impl CompletionService {
    fn model_name(&self) -> &str {
        match self {
            Self::OpenAi { model_name, .. } => model_name,
            Self::Anthropic { model_name, .. } => model_name,
            Self::Gemini { model_name, .. } => model_name,
            #[cfg(feature = "ollama")]
            Self::Ollama { model_name, .. } => model_name,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::OpenAi { .. } => "openai",
            Self::Anthropic { .. } => "anthropic",
            Self::Gemini { .. } => "gemini",
            #[cfg(feature = "ollama")]
            Self::Ollama { .. } => "ollama",
        }
    }
}

#[async_trait::async_trait]
impl LanguageProvider for CompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> inkflow_core::Result<String> {
        Ok(self.send(request).await?)
    }

    fn name(&self) -> &str {
        self.provider_name()
    }
}

/// Builds and sends a rig completion request for one model.
async fn send_with<M>(
    model: &M,
    request: &CompletionRequest,
) -> std::result::Result<String, CompletionError>
where
    M: RigCompletionModel,
{
    let mut builder = model
        .completion_request(request.prompt.as_str())
        .temperature_opt(request.temperature)
        .max_tokens_opt(request.max_tokens);

    if let Some(preamble) = &request.preamble {
        builder = builder.preamble(preamble.clone());
    }

    let response = builder.send().await?;
    Ok(extract_text_content(&response.choice))
}

/// Extracts text content from assistant content choices.
fn extract_text_content(choice: &OneOrMany<AssistantContent>) -> String {
    choice
        .iter()
        .filter_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

impl std::fmt::Debug for CompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("provider", &self.provider_name())
            .field("model", &self.model_name())
            .finish()
    }
}
