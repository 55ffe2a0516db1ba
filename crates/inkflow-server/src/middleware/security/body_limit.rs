//! Request body size limiting.

use axum::extract::DefaultBodyLimit;

/// Default maximum request body size: 1MB
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Creates a body limit layer with a custom size.
///
/// The limit is enforced by body extractors, so an oversized JSON body is
/// rejected with a JSON 413 response rather than a plain-text one.
pub fn create_body_limit_layer(max_size: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_size)
}
