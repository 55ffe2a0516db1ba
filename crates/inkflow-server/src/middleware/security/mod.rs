//! Security middleware for HTTP requests.
//!
//! This module provides middleware for:
//! - CORS (Cross-Origin Resource Sharing) configuration
//! - Request body size limiting

mod body_limit;
mod cors;

use axum::Router;

pub use body_limit::DEFAULT_MAX_BODY_SIZE;
pub(crate) use body_limit::create_body_limit_layer;
pub use cors::CorsConfig;
pub(crate) use cors::create_cors_layer;

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers CORS rules and the request body limit.
    fn with_security(self, cors: &CorsConfig) -> Self;

    /// Layers security middleware with development-friendly CORS settings.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig) -> Self {
        self.layer(create_body_limit_layer(DEFAULT_MAX_BODY_SIZE))
            .layer(create_cors_layer(cors))
    }

    fn with_default_security(self) -> Self {
        self.with_security(&CorsConfig::default())
    }
}
