//! Router extensions that layer middleware onto the service.
//!
//! The CLI applies them in a fixed order: security, observability, then
//! recovery as the outermost layer.

mod observability;
mod recovery;
mod security;
mod specification;

pub use crate::middleware::observability::RouterObservabilityExt;
pub use crate::middleware::recovery::{RecoveryConfig, RouterRecoveryExt};
pub use crate::middleware::security::{CorsConfig, DEFAULT_MAX_BODY_SIZE, RouterSecurityExt};
pub use crate::middleware::specification::{OpenApiConfig, RouterOpenApiExt};
