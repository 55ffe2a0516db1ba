//! Response types for HTTP handlers.

mod errors;
mod generate;
mod monitors;

pub use errors::ErrorResponse;
pub use generate::{FALLBACK_WARNING, GeneratedDiagram, GeneratedText};
pub use monitors::HealthStatus;
