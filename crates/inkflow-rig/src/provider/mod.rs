//! Multi-provider management for AI inference.

mod completion;
mod credentials;

pub use completion::{
    AnthropicModel, CompletionModel, CompletionProvider, GeminiCompletionModel,
    OpenAiCompletionModel,
};
pub use credentials::{ApiKeyCredentials, Credentials, OllamaCredentials};
