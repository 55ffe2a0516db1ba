//! Generated API reference.
//!
//! The document is assembled once from the [`ApiRouter`] when the app is
//! built, then served as JSON together with a Scalar page that reads it.
//!
//! ```rust
//! use aide::axum::ApiRouter;
//! use axum::Router;
//! use inkflow_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//!
//! let app: Router<()> = ApiRouter::new().with_open_api(&OpenApiConfig::default());
//! ```
//!
//! [`ApiRouter`]: aide::axum::ApiRouter

use std::sync::Arc;

use aide::axum::ApiRouter;
use aide::openapi::{Info, License, OpenApi, Tag};
use aide::scalar::Scalar;
use axum::Json;
use axum::routing::{Router, get};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Where the API reference is mounted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenApiConfig {
    /// Path of the generated OpenAPI document.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_JSON_PATH", default_value = "/api/openapi.json")
    )]
    pub open_api_json: String,

    /// Path of the Scalar reference page.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_SCALAR_PATH", default_value = "/api/scalar")
    )]
    pub scalar_ui: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            open_api_json: "/api/openapi.json".to_owned(),
            scalar_ui: "/api/scalar".to_owned(),
        }
    }
}

/// Extension trait for [`ApiRouter`] that finishes the router into a plain
/// `axum::`[`Router`] serving its own reference.
///
/// [`ApiRouter`]: aide::axum::ApiRouter
pub trait RouterOpenApiExt<S> {
    /// Collects the documented routes into an OpenAPI document and mounts the
    /// document and the Scalar page at the configured paths.
    fn with_open_api(self, config: &OpenApiConfig) -> Router<S>;
}

impl<S> RouterOpenApiExt<S> for ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_open_api(self, config: &OpenApiConfig) -> Router<S> {
        let mut api = OpenApi {
            info: api_info(),
            tags: api_tags(),
            ..OpenApi::default()
        };

        let router = self
            .route(&config.scalar_ui, Scalar::new(&config.open_api_json).axum_route())
            .finish_api(&mut api);

        let api = Arc::new(api);
        router.route(
            &config.open_api_json,
            get(move || serve_document(Arc::clone(&api))),
        )
    }
}

async fn serve_document(api: Arc<OpenApi>) -> Json<OpenApi> {
    Json(OpenApi::clone(&api))
}

fn api_info() -> Info {
    Info {
        title: "Inkflow API".to_owned(),
        summary: Some("Prose and Mermaid diagram generation".to_owned()),
        description: Some(
            "Turns natural-language prompts into prose or Mermaid diagram source. \
            A diagram response always renders: when the model output fails \
            validation it is replaced with a fallback diagram and the reason is \
            reported next to it."
                .to_owned(),
        ),
        license: Some(License {
            name: "MIT".to_owned(),
            identifier: Some("MIT".to_owned()),
            ..License::default()
        }),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        ..Info::default()
    }
}

fn api_tags() -> Vec<Tag> {
    [
        ("Generation", "Prompt-driven prose and diagram generation."),
        ("Health", "Liveness of the service process."),
    ]
    .into_iter()
    .map(|(name, description)| Tag {
        name: name.to_owned(),
        description: Some(description.to_owned()),
        ..Tag::default()
    })
    .collect()
}
