//! Language provider selection.

use anyhow::Context;
use inkflow_core::language::LanguageService;

use super::Cli;
use crate::TRACING_TARGET_CONFIG;

/// Creates the language service from CLI configuration.
///
/// # Errors
///
/// Returns an error if the configured provider is missing credentials or
/// names an unknown model.
pub fn create_language_service(cli: &Cli) -> anyhow::Result<LanguageService> {
    #[cfg(feature = "mock")]
    if cli.mock {
        tracing::warn!(
            target: TRACING_TARGET_CONFIG,
            "Serving scripted replies; no model will be called"
        );
        return Ok(LanguageService::new(
            inkflow_core::mock::MockLanguageProvider::new(),
        ));
    }

    let language = cli
        .service
        .connect_language(&cli.rig)
        .with_context(|| format!("failed to connect to {} provider", cli.rig.provider))?;

    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        provider = language.provider_name(),
        "Language provider connected"
    );

    Ok(language)
}
