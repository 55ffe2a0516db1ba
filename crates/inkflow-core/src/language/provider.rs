//! Language model provider trait.

use super::CompletionRequest;
use crate::Result;

/// A backend able to answer a [`CompletionRequest`] with text.
///
/// Implementations convert every transport or model failure into
/// [`Error`](crate::Error) so callers handle one failure type.
#[async_trait::async_trait]
pub trait LanguageProvider: Send + Sync {
    /// Sends the request and returns the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Short name of the backing provider, used in logs.
    fn name(&self) -> &str;
}
