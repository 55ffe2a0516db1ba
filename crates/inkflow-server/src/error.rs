//! Errors raised while assembling the service.
//!
//! Everything here happens before the first request. Failures while serving
//! use the HTTP error model in [`handler`](crate::handler) instead.

/// Result type alias for service assembly.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Service assembly failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The completion backend could not be set up from its configuration.
    #[error("language backend unavailable: {0}")]
    Language(#[from] inkflow_rig::Error),
}

impl Error {
    /// Returns `true` when the failure is fixed by changing configuration,
    /// such as a missing API key.
    #[must_use]
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Self::Language(inkflow_rig::Error::Config(_)))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn missing_key_is_misconfiguration() {
        let error = Error::from(inkflow_rig::Error::config("OPENAI_API_KEY is required"));

        assert!(error.is_misconfiguration());
        assert_eq!(
            error.to_string(),
            "language backend unavailable: configuration error: OPENAI_API_KEY is required"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn provider_failure_is_not_misconfiguration() {
        let error = Error::from(inkflow_rig::Error::provider("ollama", "connection refused"));
        assert!(!error.is_misconfiguration());
    }
}
