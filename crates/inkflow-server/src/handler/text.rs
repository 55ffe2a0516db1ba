//! Prose generation handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use inkflow_core::language::LanguageService;
use inkflow_rig::PromptProfile;

use crate::extract::Json;
use crate::handler::request::GenerateText;
use crate::handler::response::{ErrorResponse, GeneratedText};
use crate::handler::{Error, Result};
use crate::service::ServiceState;

/// Tracing target for text generation.
const TRACING_TARGET: &str = "inkflow_server::handler::text";

/// Generates prose for a free-form prompt.
#[tracing::instrument(
    skip_all,
    fields(prompt_chars = request.prompt.chars().count())
)]
async fn generate_text(
    State(language): State<LanguageService>,
    Json(request): Json<GenerateText>,
) -> Result<(StatusCode, Json<GeneratedText>)> {
    tracing::debug!(target: TRACING_TARGET, "Generating text");

    let completion = PromptProfile::Prose.request(request.prompt);
    let text = language
        .complete(&completion)
        .await
        .map_err(|error| Error::from(error).with_message("Failed to generate text"))?;

    tracing::info!(
        target: TRACING_TARGET,
        text_len = text.len(),
        "Text generated"
    );

    Ok((StatusCode::OK, Json(GeneratedText { text })))
}

fn generate_text_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Generate text")
        .description("Sends the prompt to the language model and returns lightly formatted prose.")
        .response::<200, Json<GeneratedText>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for prose generation.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/generate", post_with(generate_text, generate_text_docs))
        .with_path_items(|item| item.tag("Generation"))
}
