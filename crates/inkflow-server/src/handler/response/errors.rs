//! Error response body shared by every endpoint.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

/// Tracing target for error responses.
const TRACING_TARGET: &str = "inkflow_server::handler::response";

/// HTTP error response representation.
///
/// Serializes to `{ "error": ..., "details"?: ..., "stack"?: ... }`. The
/// name, status and context are kept for logging and never sent.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// User-facing error message.
    pub error: Cow<'a, str>,
    /// Underlying failure message, when there is one worth surfacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Cow<'a, str>>,
    /// Cause chain of the failure, only present in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Cow<'a, str>>,

    /// The error name/type identifier (not serialized in JSON)
    #[serde(skip)]
    pub name: Cow<'a, str>,
    /// Internal context for debugging (not exposed to client)
    #[serde(skip)]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "Invalid request data.",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self =
        Self::new("not_found", "Resource not found.", StatusCode::NOT_FOUND);
    pub const PAYLOAD_TOO_LARGE: Self = Self::new(
        "payload_too_large",
        "Payload too large.",
        StatusCode::PAYLOAD_TOO_LARGE,
    );
    pub const UNSUPPORTED_MEDIA_TYPE: Self = Self::new(
        "unsupported_media_type",
        "Unsupported media type.",
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
    );

    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "Internal server error.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, error: &'a str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            details: None,
            stack: None,
            name: Cow::Borrowed(name),
            context: None,
            status,
        }
    }

    /// Replaces the user-facing error message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.error = message.into();
        self
    }

    /// Attaches details about the underlying failure.
    #[inline]
    pub fn with_details(mut self, details: impl Into<Cow<'a, str>>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attaches the cause chain of the underlying failure.
    #[inline]
    pub fn with_stack(mut self, stack: impl Into<Cow<'a, str>>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Attaches internal context that is logged but not serialized.
    #[inline]
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        tracing::warn!(
            target: TRACING_TARGET,
            name = %self.name,
            status = self.status.as_u16(),
            error = %self.error,
            context = self.context.as_deref(),
            "Error response"
        );

        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_only_public_fields() {
        let response = ErrorResponse::BAD_REQUEST
            .with_message("valid prompt string is required")
            .with_context("prompt field was missing");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "valid prompt string is required" })
        );
    }

    #[test]
    fn serializes_details_and_stack_when_present() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR
            .with_message("Failed to generate diagram")
            .with_details("connection refused")
            .with_stack("Error: ExternalError: connection refused");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Failed to generate diagram");
        assert_eq!(json["details"], "connection refused");
        assert_eq!(json["stack"], "Error: ExternalError: connection refused");
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ErrorResponse::NOT_FOUND.error, "Resource not found.");
        assert_eq!(ErrorResponse::NOT_FOUND.status, StatusCode::NOT_FOUND);
    }
}
