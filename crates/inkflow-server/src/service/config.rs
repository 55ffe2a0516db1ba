#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use inkflow_core::language::LanguageService;
use inkflow_rig::RigConfig;
use serde::{Deserialize, Serialize};

use crate::service::{AppEnvironment, ErrorDisclosure, Result};

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
#[builder(pattern = "owned", setter(into, prefix = "with"))]
pub struct ServiceConfig {
    /// Runtime environment (development or production).
    ///
    /// Development responses include the cause chain of failed model calls.
    #[cfg_attr(
        feature = "config",
        arg(long = "environment", env = "APP_ENV", default_value = "production")
    )]
    #[builder(default)]
    pub environment: AppEnvironment,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Returns the error disclosure policy for the configured environment.
    #[inline]
    pub fn disclosure(&self) -> ErrorDisclosure {
        self.environment.disclosure()
    }

    /// Connects to the completion backend described by `rig`.
    ///
    /// # Errors
    ///
    /// Fails when the selected provider is missing a credential or its
    /// client cannot be built.
    pub fn connect_language(&self, rig: &RigConfig) -> Result<LanguageService> {
        let provider = rig.completion_provider()?;
        Ok(LanguageService::new(provider))
    }
}
