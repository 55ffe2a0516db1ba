//! Structural gate for extracted diagram bodies.
//!
//! This is a cheap check, not a Mermaid parser: it only verifies that the body
//! is non-empty, opens with a known diagram keyword and has some content.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use super::DiagramStarter;

/// Minimum number of non-blank lines a diagram must have.
const MIN_CONTENT_LINES: usize = 2;

/// Reason an extracted diagram was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body is empty or only whitespace.
    #[error("empty diagram code")]
    Empty,
    /// The first non-empty line does not open with a known keyword.
    #[error("Invalid diagram type. Must start with one of: {allowed}")]
    InvalidStarter { allowed: String },
    /// Fewer than two non-blank lines.
    #[error("diagram appears incomplete")]
    Incomplete,
}

/// Outcome of [`validate_diagram`].
///
/// Serializes as `{ "isValid": bool, "error"?: string }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the diagram passed every rule.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the rejection reason, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Converts into a `Result`, keeping the rejection reason as the error.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(error) => Err(error),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Valid => {
                let mut state = serializer.serialize_struct("ValidationResult", 1)?;
                state.serialize_field("isValid", &true)?;
                state.end()
            }
            Self::Invalid(error) => {
                let mut state = serializer.serialize_struct("ValidationResult", 2)?;
                state.serialize_field("isValid", &false)?;
                state.serialize_field("error", &error.to_string())?;
                state.end()
            }
        }
    }
}

/// Checks an extracted diagram body against the structural rules.
///
/// Rules run in order and the first failure wins:
/// 1. the body must not be empty,
/// 2. the first non-empty line must open with a [`DiagramStarter`],
/// 3. at least two non-blank lines must remain.
///
/// Total over every input; never panics.
pub fn validate_diagram(code: &str) -> ValidationResult {
    let mut content_lines = code.lines().filter(|line| !line.trim().is_empty());

    let Some(first_line) = content_lines.next() else {
        return ValidationResult::Invalid(ValidationError::Empty);
    };

    if DiagramStarter::detect(first_line).is_none() {
        return ValidationResult::Invalid(ValidationError::InvalidStarter {
            allowed: DiagramStarter::allowed_list(),
        });
    }

    if 1 + content_lines.count() < MIN_CONTENT_LINES {
        return ValidationResult::Invalid(ValidationError::Incomplete);
    }

    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accepts_minimal_flowchart() {
        assert!(validate_diagram("flowchart TD\nA-->B").is_valid());
    }

    #[test]
    fn blank_lines_do_not_count() {
        assert!(validate_diagram("\n\ngraph LR\n\n   \nA-->B\n\n").is_valid());
    }

    #[test]
    fn empty_body_is_rejected_first() {
        assert_eq!(
            validate_diagram(""),
            ValidationResult::Invalid(ValidationError::Empty)
        );
        assert_eq!(
            validate_diagram(" \n\t\n "),
            ValidationResult::Invalid(ValidationError::Empty)
        );
    }

    #[test]
    fn starter_is_checked_before_length() {
        let result = validate_diagram("I cannot help with that.");
        assert!(matches!(
            result.error(),
            Some(ValidationError::InvalidStarter { .. })
        ));
    }

    #[test]
    fn single_starter_line_is_incomplete() {
        assert_eq!(
            validate_diagram("flowchart TD"),
            ValidationResult::Invalid(ValidationError::Incomplete)
        );
    }

    #[test]
    fn invalid_starter_message_lists_keywords() {
        let error = validate_diagram("hello\nworld").into_result().unwrap_err();
        let message = error.to_string();
        assert!(message.starts_with("Invalid diagram type. Must start with one of: "));
        assert!(message.contains("sequenceDiagram"));
        assert!(message.contains("C4Context"));
    }

    #[test]
    fn serializes_with_camel_case_flag() {
        let valid = serde_json::to_value(ValidationResult::Valid).unwrap();
        assert_eq!(valid, serde_json::json!({ "isValid": true }));

        let invalid =
            serde_json::to_value(ValidationResult::Invalid(ValidationError::Incomplete)).unwrap();
        assert_eq!(
            invalid,
            serde_json::json!({ "isValid": false, "error": "diagram appears incomplete" })
        );
    }

    #[test]
    fn handles_very_long_input() {
        let long = format!("pie title Pets\n{}", "\"Dogs\" : 386\n".repeat(2_000));
        assert!(long.len() > 10_000);
        assert!(validate_diagram(&long).is_valid());
    }

    proptest! {
        #[test]
        fn never_panics(code in any::<String>()) {
            let _ = validate_diagram(&code);
        }

        #[test]
        fn whitespace_only_is_empty(code in "[ \\t\\n\\r]{0,64}") {
            prop_assert_eq!(
                validate_diagram(&code),
                ValidationResult::Invalid(ValidationError::Empty)
            );
        }
    }
}
