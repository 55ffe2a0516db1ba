//! Language model error to HTTP error conversion.

use inkflow_core::ErrorKind as CoreErrorKind;

use super::http_error::{Error as HttpError, ErrorKind};
use crate::service::ErrorDisclosure;

/// Tracing target for service error conversions.
const TRACING_TARGET: &str = "inkflow_server::handler::service";

impl From<inkflow_core::Error> for HttpError<'static> {
    fn from(error: inkflow_core::Error) -> Self {
        match error.kind() {
            CoreErrorKind::NetworkError
            | CoreErrorKind::Timeout
            | CoreErrorKind::RateLimited
            | CoreErrorKind::ServiceUnavailable => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Language model request failed"
                );
            }
            CoreErrorKind::Configuration | CoreErrorKind::Authentication => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Language model is misconfigured"
                );
            }
            _ => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Language model operation failed"
                );
            }
        }

        // Any failure of the model call is terminal for the request.
        ErrorKind::InternalServerError.with_context(error.to_string())
    }
}

impl HttpError<'static> {
    /// Converts a language model failure, surfacing its message as `details`.
    ///
    /// The cause chain is attached as `stack` only when `disclosure` allows it.
    pub fn from_language_failure(
        error: inkflow_core::Error,
        disclosure: ErrorDisclosure,
    ) -> Self {
        let details = error.message().to_owned();
        let stack = disclosure.stack_trace(&error);

        let http_error = Self::from(error).with_details(details);
        match stack {
            Some(stack) => http_error.with_stack(stack),
            None => http_error,
        }
    }
}
