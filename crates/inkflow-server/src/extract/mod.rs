//! Enhanced HTTP request extractors.
//!
//! Drop-in replacements for their axum counterparts that render rejections
//! as JSON error bodies and document themselves in the OpenAPI spec.
//!
//! - [`Json`] - JSON deserialization with consistent error bodies

pub mod reject;

pub use crate::extract::reject::Json;
