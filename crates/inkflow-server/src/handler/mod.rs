//! All [`ApiRouter`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use inkflow_core::language::LanguageService;
//! use inkflow_core::mock::MockLanguageProvider;
//! use inkflow_server::handler::routes;
//! use inkflow_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//! use inkflow_server::service::{ServiceConfig, ServiceState};
//!
//! let language = LanguageService::new(MockLanguageProvider::new());
//! let state = ServiceState::from_config(&ServiceConfig::default(), language);
//!
//! let app: axum::Router = routes()
//!     .with_open_api(&OpenApiConfig::default())
//!     .with_state(state);
//! ```
//!
//! [`ApiRouter`]: aide::axum::ApiRouter
//! [`Handler`]: axum::handler::Handler

mod diagrams;
mod error;
mod monitors;
pub mod request;
pub mod response;
mod text;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes and the JSON 404 fallback.
///
/// [`ApiRouter`]: aide::axum::ApiRouter
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(text::routes())
        .merge(diagrams::routes())
        .merge(monitors::routes())
        .fallback(handler)
}

#[cfg(test)]
pub(crate) mod test {
    use aide::axum::ApiRouter;
    use axum::Router;
    use axum_test::TestServer;
    use inkflow_core::language::LanguageService;
    use inkflow_core::mock::MockLanguageProvider;

    use crate::service::{ErrorDisclosure, ServiceState};

    /// Returns a [`ServiceState`] backed by the given mock provider.
    pub fn create_test_state(
        provider: MockLanguageProvider,
        disclosure: ErrorDisclosure,
    ) -> ServiceState {
        ServiceState {
            language: LanguageService::new(provider),
            disclosure,
        }
    }

    /// Returns a new [`TestServer`] with the given router and state.
    pub fn create_test_server_with_state(
        router: ApiRouter<ServiceState>,
        state: ServiceState,
    ) -> anyhow::Result<TestServer> {
        let app: Router = router.with_state(state).into();
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the given router and mock provider.
    pub fn create_test_server(
        router: ApiRouter<ServiceState>,
        provider: MockLanguageProvider,
        disclosure: ErrorDisclosure,
    ) -> anyhow::Result<TestServer> {
        create_test_server_with_state(router, create_test_state(provider, disclosure))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use inkflow_core::mock::MockLanguageProvider;
    use serde_json::json;

    use super::routes;
    use crate::handler::test::create_test_server;
    use crate::service::ErrorDisclosure;

    #[tokio::test]
    async fn unknown_route_is_json_404() -> anyhow::Result<()> {
        let server = create_test_server(
            routes(),
            MockLanguageProvider::new(),
            ErrorDisclosure::Hidden,
        )?;

        let response = server.get("/api/unknown").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Resource not found." }));
        Ok(())
    }

    #[tokio::test]
    async fn all_routes_are_mounted() -> anyhow::Result<()> {
        let provider = MockLanguageProvider::new()
            .with_reply("Hello.")
            .with_reply("sequenceDiagram\n    A->>B: hi");
        let server = create_test_server(routes(), provider.clone(), ErrorDisclosure::Hidden)?;

        server
            .post("/api/generate")
            .json(&json!({ "prompt": "greet" }))
            .await
            .assert_status_ok();
        server
            .post("/api/generate-mermaid")
            .json(&json!({ "prompt": "greet" }))
            .await
            .assert_status_ok();
        server.get("/health").await.assert_status_ok();

        assert_eq!(provider.call_count().await, 2);
        Ok(())
    }
}
