//! Health check handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "inkflow_server::handler::monitors";

/// Reports that the service is up.
#[tracing::instrument(skip_all)]
async fn health_status() -> Result<(StatusCode, Json<HealthStatus>)> {
    tracing::trace!(target: TRACING_TARGET, "Health status check requested");
    Ok((StatusCode::OK, Json(HealthStatus::healthy())))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get health status")
        .description("Returns the service status and version. Does not call the language model.")
        .response::<200, Json<HealthStatus>>()
}

/// Returns routes for health monitoring.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Health"))
}
