//! Runs the full extraction, validation and fallback chain.

use super::{ValidationError, ValidationResult, extract_diagram, fallback_diagram, validate_diagram};
use crate::TRACING_TARGET_DIAGRAM;

/// Final diagram produced from one model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramOutcome {
    /// The model output passed validation and is returned as extracted.
    Generated { code: String },
    /// The model output was rejected and replaced with the fallback diagram.
    Fallback {
        code: String,
        validation_error: ValidationError,
    },
}

impl DiagramOutcome {
    /// Returns the diagram source.
    pub fn code(&self) -> &str {
        match self {
            Self::Generated { code } | Self::Fallback { code, .. } => code,
        }
    }

    /// Returns `true` if the model output was used directly.
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }

    /// Returns the reason the model output was rejected, if it was.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Generated { .. } => None,
            Self::Fallback {
                validation_error, ..
            } => Some(validation_error),
        }
    }
}

/// Turns raw model text into a diagram that always passes validation.
///
/// On rejection the fallback is built from the user's `prompt`, never from
/// the rejected diagram text.
pub fn process_model_output(prompt: &str, raw: &str) -> DiagramOutcome {
    let code = extract_diagram(raw);

    match validate_diagram(&code) {
        ValidationResult::Valid => {
            tracing::debug!(
                target: TRACING_TARGET_DIAGRAM,
                raw_len = raw.len(),
                code_len = code.len(),
                "Generated diagram accepted"
            );
            DiagramOutcome::Generated { code }
        }
        ValidationResult::Invalid(validation_error) => {
            tracing::warn!(
                target: TRACING_TARGET_DIAGRAM,
                raw_len = raw.len(),
                reason = %validation_error,
                "Generated diagram rejected, using fallback"
            );
            DiagramOutcome::Fallback {
                code: fallback_diagram(prompt),
                validation_error,
            }
        }
    }
}
