//! Error types for inkflow-rig.

use std::fmt;

use inkflow_core::ErrorKind;

/// Result type alias for rig operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during rig operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Provider error (API call failed, rate limited, etc.)
    #[error("provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a provider error.
    pub fn provider(provider: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}

impl From<Error> for inkflow_core::Error {
    fn from(error: Error) -> Self {
        let kind = match &error {
            Error::Provider { .. } => ErrorKind::ExternalError,
            Error::Config(_) => ErrorKind::Configuration,
        };

        inkflow_core::Error::new(kind)
            .with_message(error.to_string())
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_core_error() {
        let error: inkflow_core::Error = Error::provider("openai", "429 Too Many Requests").into();
        assert_eq!(error.kind(), ErrorKind::ExternalError);
        assert_eq!(
            error.message(),
            "provider error: openai: 429 Too Many Requests"
        );
        assert!(error.diagnostic_trace().contains("caused by"));
    }

    #[test]
    fn config_errors_keep_their_kind() {
        let error: inkflow_core::Error = Error::config("missing OPENAI_API_KEY").into();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
