//! Fixed prompt profiles for the two generation endpoints.

use inkflow_core::language::CompletionRequest;

const PROSE_PREAMBLE: &str = "\
You are a helpful writing assistant. Answer the user's request with clear, \
concise prose. Light formatting such as short paragraphs, bullet lists and \
bold text is fine. Do not wrap the answer in code fences.";

const DIAGRAM_PREAMBLE: &str = "\
You are an expert at writing Mermaid diagrams. Convert the user's request into \
a single valid Mermaid diagram.

Rules:
1. Choose the diagram type that best fits the request: flowchart for processes \
and decisions, sequenceDiagram for interactions over time, classDiagram for \
object models, stateDiagram-v2 for state machines, erDiagram for data models, \
gantt for schedules, pie for proportions, journey for user journeys, mindmap \
for idea hierarchies and timeline for chronologies.
2. The first line must be the diagram type keyword, for example `flowchart TD` \
or `sequenceDiagram`.
3. Wrap participant, actor and node names in double quotes when they contain \
spaces or special characters such as parentheses, colons, slashes or dashes.
4. Keep node identifiers short and alphanumeric and put descriptive text in labels.
5. Output only the diagram code. Do not add explanations, prose, comments or \
markdown code fences.";

/// Sampling settings and system instruction for one kind of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptProfile {
    /// Lightly formatted prose.
    Prose,
    /// Mermaid diagram source.
    Diagram,
}

impl PromptProfile {
    /// System instruction sent ahead of the user prompt.
    pub fn preamble(self) -> &'static str {
        match self {
            Self::Prose => PROSE_PREAMBLE,
            Self::Diagram => DIAGRAM_PREAMBLE,
        }
    }

    /// Sampling temperature.
    pub fn temperature(self) -> f64 {
        match self {
            Self::Prose => 0.7,
            Self::Diagram => 0.3,
        }
    }

    /// Upper bound on generated tokens.
    pub fn max_tokens(self) -> u64 {
        match self {
            Self::Prose => 1024,
            Self::Diagram => 2048,
        }
    }

    /// Builds a request for `prompt` with this profile's settings.
    pub fn request(self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            preamble: Some(self.preamble().to_owned()),
            prompt: prompt.into(),
            temperature: Some(self.temperature()),
            max_tokens: Some(self.max_tokens()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_profile_is_conservative() {
        let request = PromptProfile::Diagram.request("draw a login flow");
        assert_eq!(request.prompt, "draw a login flow");
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.max_tokens, Some(2048));
    }

    #[test]
    fn diagram_preamble_states_notation_rules() {
        let preamble = PromptProfile::Diagram.preamble();
        assert!(preamble.contains("double quotes"));
        assert!(preamble.contains("Output only the diagram code"));
        assert!(preamble.contains("code fences"));
    }

    #[test]
    fn prose_profile_settings() {
        let request = PromptProfile::Prose.request("write a haiku");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(1024));
        assert_eq!(request.preamble.as_deref(), Some(PROSE_PREAMBLE));
    }
}
