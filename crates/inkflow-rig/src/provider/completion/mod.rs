//! Completion models and providers.

mod model;
mod provider;

pub use model::{AnthropicModel, CompletionModel, GeminiCompletionModel, OpenAiCompletionModel};
pub use provider::CompletionProvider;
