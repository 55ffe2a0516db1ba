//! Request bodies for the generation endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Maximum prompt length accepted by the diagram endpoint, in characters.
pub const MAX_PROMPT_CHARS: usize = 1000;

/// Request payload for prose generation.
#[must_use]
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateText {
    /// Free-form instruction for the language model.
    pub prompt: String,
}

/// Request payload for Mermaid diagram generation.
///
/// Any JSON document decodes into this type. Only an object carrying a string
/// `prompt` yields `Some`; every other body (a bare string, `null`, an array,
/// a missing or non-string field) becomes `None` so the handler rejects it
/// with a single message.
#[must_use]
#[derive(Debug, Clone, Default, JsonSchema)]
pub struct GenerateDiagram {
    /// Description of the diagram to draw, at most 1000 characters.
    #[serde(default)]
    #[schemars(with = "String")]
    pub prompt: Option<String>,
}

impl From<Value> for GenerateDiagram {
    fn from(body: Value) -> Self {
        let prompt = match body {
            Value::Object(mut fields) => match fields.remove("prompt") {
                Some(Value::String(prompt)) => Some(prompt),
                _ => None,
            },
            _ => None,
        };

        Self { prompt }
    }
}

impl<'de> Deserialize<'de> for GenerateDiagram {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Reason a diagram prompt was rejected before calling the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// Prompt was missing, not a string, or empty.
    #[error("valid prompt string is required")]
    Missing,
    /// Prompt exceeded [`MAX_PROMPT_CHARS`].
    #[error("prompt too long (max 1000 characters)")]
    TooLong,
}

impl GenerateDiagram {
    /// Returns the prompt if it is a non-empty string of at most
    /// [`MAX_PROMPT_CHARS`] characters.
    pub fn validated_prompt(&self) -> Result<&str, PromptError> {
        let prompt = match self.prompt.as_deref() {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(PromptError::Missing),
        };

        if prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(PromptError::TooLong);
        }

        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateDiagram {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn accepts_plain_prompt() {
        let request = parse(r#"{ "prompt": "draw a login flow" }"#);
        assert_eq!(request.validated_prompt(), Ok("draw a login flow"));
    }

    #[test]
    fn missing_null_and_wrong_type_are_missing() {
        for body in [
            r#"{}"#,
            r#"{ "prompt": null }"#,
            r#"{ "prompt": 42 }"#,
            r#"{ "prompt": ["a"] }"#,
            r#"{ "prompt": "" }"#,
        ] {
            assert_eq!(
                parse(body).validated_prompt(),
                Err(PromptError::Missing),
                "{body}"
            );
        }
    }

    #[test]
    fn non_object_bodies_are_missing() {
        for body in [
            r#""draw a flow""#,
            "null",
            "42",
            "true",
            "[]",
            r#"[{ "prompt": "x" }]"#,
        ] {
            assert_eq!(
                parse(body).validated_prompt(),
                Err(PromptError::Missing),
                "{body}"
            );
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let request = parse(r#"{ "prompt": "draw", "theme": "dark" }"#);
        assert_eq!(request.validated_prompt(), Ok("draw"));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let at_limit = GenerateDiagram {
            prompt: Some("é".repeat(MAX_PROMPT_CHARS)),
        };
        assert!(at_limit.validated_prompt().is_ok());

        let over_limit = GenerateDiagram {
            prompt: Some("a".repeat(MAX_PROMPT_CHARS + 1)),
        };
        assert_eq!(over_limit.validated_prompt(), Err(PromptError::TooLong));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PromptError::Missing.to_string(),
            "valid prompt string is required"
        );
        assert_eq!(
            PromptError::TooLong.to_string(),
            "prompt too long (max 1000 characters)"
        );
    }

    #[test]
    fn text_request_requires_prompt() {
        assert!(serde_json::from_str::<GenerateText>("{}").is_err());
        let request: GenerateText = serde_json::from_str(r#"{ "prompt": "hi" }"#).unwrap();
        assert_eq!(request.prompt, "hi");
    }
}
