//! Diagram type keywords recognised at the start of a diagram body.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Keyword that opens a Mermaid diagram and names its type.
///
/// Matching is case-insensitive and prefix based, so `stateDiagram` also
/// covers `stateDiagram-v2` and `graph` covers `graph TD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum DiagramStarter {
    #[strum(serialize = "graph")]
    Graph,
    #[strum(serialize = "flowchart")]
    Flowchart,
    #[strum(serialize = "sequenceDiagram")]
    Sequence,
    #[strum(serialize = "classDiagram")]
    Class,
    #[strum(serialize = "stateDiagram")]
    State,
    #[strum(serialize = "erDiagram")]
    EntityRelationship,
    #[strum(serialize = "journey")]
    Journey,
    #[strum(serialize = "gantt")]
    Gantt,
    #[strum(serialize = "pie")]
    Pie,
    #[strum(serialize = "gitGraph")]
    GitGraph,
    #[strum(serialize = "mindmap")]
    Mindmap,
    #[strum(serialize = "timeline")]
    Timeline,
    #[strum(serialize = "quadrantChart")]
    QuadrantChart,
    #[strum(serialize = "C4Context")]
    C4Context,
}

impl DiagramStarter {
    /// Every recognised starter, in the order they are tried.
    ///
    /// Both extraction and validation read this one list.
    pub const ALL: [Self; 14] = [
        Self::Graph,
        Self::Flowchart,
        Self::Sequence,
        Self::Class,
        Self::State,
        Self::EntityRelationship,
        Self::Journey,
        Self::Gantt,
        Self::Pie,
        Self::GitGraph,
        Self::Mindmap,
        Self::Timeline,
        Self::QuadrantChart,
        Self::C4Context,
    ];

    /// Returns the keyword as written in Mermaid source.
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// Returns `true` if the trimmed line begins with this keyword, ignoring case.
    pub fn matches_line(self, line: &str) -> bool {
        let keyword = self.keyword();
        line.trim()
            .get(..keyword.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
    }

    /// Finds the starter that opens `line`, if any.
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|starter| starter.matches_line(line))
    }

    /// Returns `true` for diagram types whose structure is carried by indentation.
    pub fn is_indentation_structured(self) -> bool {
        matches!(self, Self::Mindmap)
    }

    /// Comma separated list of every keyword, used in diagnostics.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|starter| starter.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn detects_keyword_regardless_of_case() {
        assert_eq!(
            DiagramStarter::detect("FLOWCHART TD"),
            Some(DiagramStarter::Flowchart)
        );
        assert_eq!(
            DiagramStarter::detect("   sequencediagram"),
            Some(DiagramStarter::Sequence)
        );
        assert_eq!(
            DiagramStarter::detect("c4context"),
            Some(DiagramStarter::C4Context)
        );
    }

    #[test]
    fn state_keyword_covers_v2() {
        assert_eq!(
            DiagramStarter::detect("stateDiagram-v2"),
            Some(DiagramStarter::State)
        );
    }

    #[test]
    fn rejects_prose_and_short_lines() {
        assert_eq!(DiagramStarter::detect("Here is your diagram:"), None);
        assert_eq!(DiagramStarter::detect("pi"), None);
        assert_eq!(DiagramStarter::detect(""), None);
    }

    #[test]
    fn non_ascii_prefix_does_not_panic() {
        assert_eq!(DiagramStarter::detect("ééé graph"), None);
        assert_eq!(DiagramStarter::detect("g\u{00e9}aph"), None);
    }

    #[test]
    fn parses_from_keyword() {
        assert_eq!(
            DiagramStarter::from_str("erdiagram").ok(),
            Some(DiagramStarter::EntityRelationship)
        );
        assert_eq!(DiagramStarter::Gantt.to_string(), "gantt");
    }

    #[test]
    fn allowed_list_names_every_keyword() {
        let list = DiagramStarter::allowed_list();
        for starter in DiagramStarter::ALL {
            assert!(list.contains(starter.keyword()));
        }
        assert!(list.starts_with("graph, flowchart, sequenceDiagram"));
    }
}
