//! Application state and dependency injection.

mod config;
mod disclosure;

use inkflow_core::language::LanguageService;

pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::service::disclosure::{AppEnvironment, ErrorDisclosure};
// Re-export error types from crate root for convenience
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    // External services:
    pub language: LanguageService,

    // Internal services:
    pub disclosure: ErrorDisclosure,
}

impl ServiceState {
    /// Initializes application state from configuration and a connected
    /// language service.
    pub fn from_config(config: &ServiceConfig, language: LanguageService) -> Self {
        Self {
            language,
            disclosure: config.disclosure(),
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(language: LanguageService);

// Internal services:
impl_di!(disclosure: ErrorDisclosure);
