//! Response bodies for the generation endpoints.

use inkflow_core::diagram::DiagramOutcome;
use schemars::JsonSchema;
use serde::Serialize;

/// Warning attached when the model output was replaced with a fallback diagram.
pub const FALLBACK_WARNING: &str =
    "Generated diagram failed validation; a fallback diagram was returned instead";

/// Response for prose generation.
#[must_use]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GeneratedText {
    /// Generated prose.
    pub text: String,
}

/// Response for diagram generation.
///
/// `generated` is present only when the model output was used as is;
/// `warning` and `validationError` only when it was replaced.
#[must_use]
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDiagram {
    /// Mermaid source that is safe to render.
    pub mermaid_code: String,
    /// Always `true` when a diagram is returned.
    pub success: bool,
    /// Set to `true` when the model output passed validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,
    /// Notice that a fallback diagram replaced the model output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Why the model output was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
}

impl From<DiagramOutcome> for GeneratedDiagram {
    fn from(outcome: DiagramOutcome) -> Self {
        match outcome {
            DiagramOutcome::Generated { code } => Self {
                mermaid_code: code,
                success: true,
                generated: Some(true),
                warning: None,
                validation_error: None,
            },
            DiagramOutcome::Fallback {
                code,
                validation_error,
            } => Self {
                mermaid_code: code,
                success: true,
                generated: None,
                warning: Some(FALLBACK_WARNING.to_owned()),
                validation_error: Some(validation_error.to_string()),
            },
        }
    }
}
