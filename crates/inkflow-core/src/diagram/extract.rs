//! Isolates the diagram body from raw model output.

use std::sync::LazyLock;

use regex::Regex;

use super::DiagramStarter;

static LEADING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^```(?:mermaid)?\s*").expect("leading fence regex is a valid constant")
});

static TRAILING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*```\s*$").expect("trailing fence regex is a valid constant")
});

/// Strips code fences and any prose preceding the first diagram keyword.
///
/// This never judges validity. When no line opens with a [`DiagramStarter`],
/// the trimmed, de-fenced text is returned unchanged and the decision is left
/// to [`validate_diagram`](super::validate_diagram).
///
/// Once the starter line is found, every retained line loses its trailing
/// whitespace and, unless the diagram type is indentation structured, its
/// leading indentation too.
pub fn extract_diagram(raw: &str) -> String {
    let text = raw.trim();
    let text = LEADING_FENCE.replace(text, "");
    let text = TRAILING_FENCE.replace(&text, "");
    let text = text.trim();

    let lines: Vec<&str> = text.lines().collect();
    let Some((start, starter)) = lines
        .iter()
        .enumerate()
        .find_map(|(index, line)| DiagramStarter::detect(line).map(|s| (index, s)))
    else {
        return text.to_owned();
    };

    let keep_indent = starter.is_indentation_structured();
    lines[start..]
        .iter()
        .map(|line| if keep_indent { line.trim_end() } else { line.trim() })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_tagged_fence() {
        let raw = "```mermaid\nflowchart TD\n A-->B\n```";
        assert_eq!(extract_diagram(raw), "flowchart TD\nA-->B");
    }

    #[test]
    fn strips_untagged_fence_with_surrounding_whitespace() {
        let raw = "  \n```\nsequenceDiagram\n  Alice->>Bob: Hi\n```  \n";
        assert_eq!(extract_diagram(raw), "sequenceDiagram\nAlice->>Bob: Hi");
    }

    #[test]
    fn fence_tag_is_case_insensitive() {
        let raw = "```Mermaid\ngraph LR\nA-->B\n```";
        assert_eq!(extract_diagram(raw), "graph LR\nA-->B");
    }

    #[test]
    fn drops_prose_before_starter() {
        let raw = "Sure! Here is the diagram you asked for.\nIt shows the flow.\n\nflowchart LR\nA-->B";
        assert_eq!(extract_diagram(raw), "flowchart LR\nA-->B");
    }

    #[test]
    fn keeps_text_without_starter() {
        let raw = "  I cannot help with that.\n  Sorry.  ";
        assert_eq!(extract_diagram(raw), "I cannot help with that.\n  Sorry.");
    }

    #[test]
    fn keeps_mindmap_indentation() {
        let raw = "```mermaid\nmindmap\n  root\n    child   \n```";
        assert_eq!(extract_diagram(raw), "mindmap\n  root\n    child");
    }

    #[test]
    fn interior_fences_are_left_alone() {
        let raw = "```mermaid\nflowchart TD\nA-->B\n```\nnotes\n```mermaid\nC-->D\n```";
        let extracted = extract_diagram(raw);
        assert!(extracted.starts_with("flowchart TD"));
        assert!(extracted.contains("```\nnotes\n```mermaid"));
        assert!(!extracted.ends_with("```"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(extract_diagram(""), "");
        assert_eq!(extract_diagram("   \n\t"), "");
        assert_eq!(extract_diagram("```mermaid\n```"), "");
    }

    proptest! {
        #[test]
        fn extraction_is_idempotent(raw in "[a-zA-Z0-9 :>\\-\\n\\t\"\\[\\]]{0,200}") {
            let once = extract_diagram(&raw);
            prop_assert_eq!(extract_diagram(&once), once);
        }

        #[test]
        fn prose_before_starter_is_dropped(
            // No keyword begins with any of these letters.
            prose in prop::collection::vec("[ABDHIKLNORUVWXYZ][a-z ,.!]{0,40}", 0..5),
            body in prop::collection::vec("[A-Z]-->[A-Z]", 1..5),
        ) {
            let mut raw = prose.join("\n");
            raw.push_str("\nflowchart TD\n");
            raw.push_str(&body.join("\n"));

            let expected = format!("flowchart TD\n{}", body.join("\n"));
            prop_assert_eq!(extract_diagram(&raw), expected);
        }

        #[test]
        fn fenced_content_has_no_fence_left(
            body in prop::collection::vec("[A-Z]-->[A-Z]", 1..5),
            tag in prop::sample::select(vec!["", "mermaid", "MERMAID"]),
        ) {
            let inner = format!("graph TD\n{}", body.join("\n"));
            let raw = format!("```{tag}\n{inner}\n```\n");
            let extracted = extract_diagram(&raw);
            prop_assert!(!extracted.contains("```"));
            prop_assert_eq!(extracted, inner);
        }
    }
}
