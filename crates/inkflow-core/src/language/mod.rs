//! Language model abstractions.
//!
//! The model is treated as an opaque text-in, text-out function that may
//! fail. Concrete backends implement [`LanguageProvider`] and are wrapped in
//! a [`LanguageService`] for logging.
//!
//! # Example
//!
//! ```rust,ignore
//! use inkflow_core::language::{CompletionRequest, LanguageProvider};
//!
//! struct Echo;
//!
//! #[async_trait::async_trait]
//! impl LanguageProvider for Echo {
//!     async fn complete(&self, request: &CompletionRequest) -> Result<String> {
//!         Ok(request.prompt.clone())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//! }
//! ```

mod provider;
mod request;
mod service;

pub use provider::LanguageProvider;
pub use request::{CompletionRequest, CompletionRequestBuilder, CompletionRequestError};
pub use service::LanguageService;

pub(crate) use crate::TRACING_TARGET_LANGUAGE as TRACING_TARGET;
