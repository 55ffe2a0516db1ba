//! Always-valid replacement diagram used when generation output is rejected.

/// Maximum number of characters of the request echoed into the fallback.
pub const FALLBACK_PROMPT_CHARS: usize = 50;

/// Builds a fixed flowchart that explains the failure and echoes the request.
///
/// The prompt is cut to [`FALLBACK_PROMPT_CHARS`] characters and then only
/// double quotes are escaped. Newlines and other Mermaid syntax in the prompt
/// are embedded as is.
///
/// The result always passes [`validate_diagram`](super::validate_diagram).
pub fn fallback_diagram(prompt: &str) -> String {
    let label = escape_label(truncate_chars(prompt, FALLBACK_PROMPT_CHARS));

    format!(
        "flowchart TD\n    \
         A[\"Request: {label}\"] --> B[\"Diagram generation failed\"]\n    \
         B --> C[\"Try simplifying your request\"]\n    \
         B --> D[\"Be more specific\"]\n    \
         B --> E[\"Use different keywords\"]\n    \
         style A fill:#ffe6e6,stroke:#cc0000\n    \
         style B fill:#ffcccc,stroke:#cc0000"
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn escape_label(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::diagram::validate_diagram;

    fn request_line(diagram: &str) -> &str {
        diagram
            .lines()
            .nth(1)
            .expect("fallback has a request line")
            .trim()
    }

    #[test]
    fn has_fixed_shape() {
        let diagram = fallback_diagram("draw a login flow");
        let expected = "flowchart TD\n    \
            A[\"Request: draw a login flow\"] --> B[\"Diagram generation failed\"]\n    \
            B --> C[\"Try simplifying your request\"]\n    \
            B --> D[\"Be more specific\"]\n    \
            B --> E[\"Use different keywords\"]\n    \
            style A fill:#ffe6e6,stroke:#cc0000\n    \
            style B fill:#ffcccc,stroke:#cc0000";
        assert_eq!(diagram, expected);
    }

    #[test]
    fn escapes_double_quotes() {
        let diagram = fallback_diagram(r#"say "hi" to Bob"#);
        assert_eq!(
            request_line(&diagram),
            r#"A["Request: say \"hi\" to Bob"] --> B["Diagram generation failed"]"#
        );
    }

    #[test]
    fn truncates_long_prompts() {
        let prompt: String = ('a'..='z').cycle().take(200).collect();
        let diagram = fallback_diagram(&prompt);
        let expected = format!("Request: {}\"]", &prompt[..50]);
        assert!(request_line(&diagram).contains(&expected));
        assert!(!diagram.contains(&prompt[..51]));
    }

    #[test]
    fn truncation_counts_characters() {
        let prompt = "é".repeat(60);
        let diagram = fallback_diagram(&prompt);
        assert!(diagram.contains(&format!("Request: {}\"]", "é".repeat(50))));
    }

    #[test]
    fn truncation_happens_before_escaping() {
        let prompt = "\"".repeat(60);
        let diagram = fallback_diagram(&prompt);
        assert!(diagram.contains(&format!("Request: {}\"]", "\\\"".repeat(50))));
    }

    #[test]
    fn empty_prompt_is_still_valid() {
        assert!(validate_diagram(&fallback_diagram("")).is_valid());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn fallback_always_validates(prompt in "(?s).{0,200}") {
            prop_assert!(validate_diagram(&fallback_diagram(&prompt)).is_valid());
        }

        #[test]
        fn fallback_with_quotes_and_newlines_validates(
            prompt in "[a-z \"\\n]{0,120}",
        ) {
            let diagram = fallback_diagram(&prompt);
            prop_assert!(diagram.starts_with("flowchart TD\n"));
            prop_assert!(validate_diagram(&diagram).is_valid());
        }
    }
}
