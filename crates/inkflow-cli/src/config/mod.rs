//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig          # Host, port, shutdown
//! ├── middleware: MiddlewareConfig  # CORS, OpenAPI, recovery/timeouts
//! ├── service: ServiceConfig        # Runtime environment
//! └── rig: RigConfig                # Completion provider, model, credentials
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure provider and server
//! inkflow --llm-provider anthropic --port 8080
//!
//! # Or via environment variables
//! LLM_PROVIDER=anthropic PORT=8080 inkflow
//! ```

mod middleware;
mod provider;
mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
use inkflow_rig::RigConfig;
use inkflow_server::service::ServiceConfig;
pub use middleware::MiddlewareConfig;
pub use provider::create_language_service;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
///
/// Combines all configuration groups for the inkflow server:
/// - [`ServerConfig`]: Network binding and shutdown
/// - [`MiddlewareConfig`]: HTTP middleware (CORS, OpenAPI, recovery)
/// - [`ServiceConfig`]: Runtime environment and error disclosure
/// - [`RigConfig`]: Completion provider selection and credentials
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "inkflow")]
#[command(about = "Prose and Mermaid diagram generation server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Service configuration (runtime environment).
    #[clap(flatten)]
    pub service: ServiceConfig,

    /// Completion provider configuration.
    #[clap(flatten)]
    pub rig: RigConfig,

    /// Serve scripted replies instead of calling a model.
    #[cfg(feature = "mock")]
    #[arg(long, env = "LLM_MOCK", default_value_t = false)]
    #[serde(default)]
    pub mock: bool,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so its values
    /// act as defaults for the `env` attributes.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        Ok(())
    }

    /// Logs configuration (no credentials).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            environment = %self.service.environment,
            disclosure = ?self.service.disclosure(),
            "Service configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            provider = %self.rig.provider,
            model = self.rig.model.as_deref().unwrap_or("default"),
            mock = self.uses_mock(),
            "Completion provider configuration"
        );
    }

    /// Returns whether scripted replies replace the configured provider.
    pub fn uses_mock(&self) -> bool {
        #[cfg(feature = "mock")]
        {
            self.mock
        }

        #[cfg(not(feature = "mock"))]
        {
            false
        }
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "dotenv").then_some("dotenv"),
            cfg!(feature = "mock").then_some("mock"),
            cfg!(feature = "ollama").then_some("ollama"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use inkflow_rig::ProviderKind;
    use inkflow_server::service::AppEnvironment;

    use super::*;

    #[test]
    fn parses_flattened_groups() {
        let cli = Cli::try_parse_from([
            "inkflow",
            "--port",
            "8080",
            "--environment",
            "development",
            "--llm-provider",
            "anthropic",
            "--request-timeout",
            "90",
        ])
        .unwrap();

        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.service.environment, AppEnvironment::Development);
        assert_eq!(cli.rig.provider, ProviderKind::Anthropic);
        assert_eq!(cli.middleware.recovery.request_timeout, 90);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn rejects_privileged_port() {
        let cli = Cli::try_parse_from(["inkflow", "--port", "80"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn rejects_unknown_environment() {
        let result = Cli::try_parse_from(["inkflow", "--environment", "staging"]);
        assert!(result.is_err());
    }
}
