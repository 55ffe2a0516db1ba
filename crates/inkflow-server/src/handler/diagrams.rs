//! Mermaid diagram generation handler.
//!
//! The prompt is checked before any model call. The model output then runs
//! through extraction and validation, and a rejected diagram is replaced
//! with a fallback built from the user's prompt, so a successful response
//! always carries a renderable diagram.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use inkflow_core::diagram::process_model_output;
use inkflow_core::language::LanguageService;
use inkflow_rig::PromptProfile;

use crate::extract::Json;
use crate::handler::request::GenerateDiagram;
use crate::handler::response::{ErrorResponse, GeneratedDiagram};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ErrorDisclosure, ServiceState};

/// Tracing target for diagram generation.
const TRACING_TARGET: &str = "inkflow_server::handler::diagrams";

/// Generates a Mermaid diagram for a prompt.
#[tracing::instrument(skip_all)]
async fn generate_diagram(
    State(language): State<LanguageService>,
    State(disclosure): State<ErrorDisclosure>,
    Json(request): Json<GenerateDiagram>,
) -> Result<(StatusCode, Json<GeneratedDiagram>)> {
    let prompt = request.validated_prompt().map_err(|error| {
        tracing::debug!(
            target: TRACING_TARGET,
            reason = %error,
            "Diagram prompt rejected"
        );
        ErrorKind::BadRequest.with_message(error.to_string())
    })?;

    tracing::debug!(
        target: TRACING_TARGET,
        prompt_chars = prompt.chars().count(),
        "Generating diagram"
    );

    let completion = PromptProfile::Diagram.request(prompt);
    let raw = language.complete(&completion).await.map_err(|error| {
        Error::from_language_failure(error, disclosure).with_message("Failed to generate diagram")
    })?;

    let outcome = process_model_output(prompt, &raw);

    tracing::info!(
        target: TRACING_TARGET,
        generated = outcome.is_generated(),
        code_len = outcome.code().len(),
        "Diagram generated"
    );

    Ok((StatusCode::OK, Json(GeneratedDiagram::from(outcome))))
}

fn generate_diagram_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Generate Mermaid diagram")
        .description(
            "Asks the language model for a Mermaid diagram. If the output fails the structural \
             check, a fallback diagram is returned with a warning and the validation error.",
        )
        .response::<200, Json<GeneratedDiagram>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for diagram generation.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/generate-mermaid",
            post_with(generate_diagram, generate_diagram_docs),
        )
        .with_path_items(|item| item.tag("Generation"))
}
