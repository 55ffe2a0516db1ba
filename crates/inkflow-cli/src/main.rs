#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use inkflow_server::handler::routes;
use inkflow_server::middleware::{
    RouterObservabilityExt, RouterOpenApiExt, RouterRecoveryExt, RouterSecurityExt,
};
use inkflow_server::service::ServiceState;

use crate::config::{Cli, MiddlewareConfig, create_language_service};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "inkflow_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "inkflow_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "inkflow_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting inkflow server"
    );

    cli.log();
    cli.validate()?;

    let language = create_language_service(&cli).context("failed to create language service")?;
    let state = ServiceState::from_config(&cli.service, language);
    let router = create_router(state, &cli.middleware);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS and body size limit
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    let api_routes: Router = routes()
        .with_open_api(&middleware.openapi)
        .with_state(state);

    api_routes
        .with_security(&middleware.cors)
        .with_observability()
        .with_recovery(&middleware.recovery)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use inkflow_core::language::LanguageService;
    use inkflow_core::mock::MockLanguageProvider;
    use inkflow_server::service::ServiceConfig;
    use serde_json::{Value, json};

    use super::*;
    use crate::config::MiddlewareConfig;

    fn create_test_server(provider: MockLanguageProvider) -> anyhow::Result<TestServer> {
        let language = LanguageService::new(provider);
        let state = ServiceState::from_config(&ServiceConfig::default(), language);
        let router = create_router(state, &MiddlewareConfig::default());
        Ok(TestServer::new(router)?)
    }

    #[tokio::test]
    async fn serves_diagrams_through_full_stack() -> anyhow::Result<()> {
        let provider = MockLanguageProvider::new().with_reply("```mermaid\ngraph LR\nA-->B\n```");
        let server = create_test_server(provider)?;

        let response = server
            .post("/api/generate-mermaid")
            .json(&json!({ "prompt": "two boxes" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "mermaidCode": "graph LR\nA-->B",
            "success": true,
            "generated": true,
        }));
        Ok(())
    }

    #[tokio::test]
    async fn serves_openapi_and_health() -> anyhow::Result<()> {
        let server = create_test_server(MockLanguageProvider::new())?;

        server.get("/health").await.assert_status_ok();

        let spec: Value = server.get("/api/openapi.json").await.json();
        assert!(spec["paths"]["/api/generate-mermaid"].is_object());
        Ok(())
    }

    #[tokio::test]
    async fn model_failure_hides_stack_in_production() -> anyhow::Result<()> {
        let provider = MockLanguageProvider::new().with_failure("upstream unavailable");
        let server = create_test_server(provider)?;

        let response = server
            .post("/api/generate-mermaid")
            .json(&json!({ "prompt": "anything" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "Failed to generate diagram");
        assert!(body.get("stack").is_none());
        Ok(())
    }
}
