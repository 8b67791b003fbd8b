//! Authored story content: nodes plus chapter progression, loaded from TOML.

use serde::Deserialize;
use std::collections::HashMap;

use crate::chapter::ChapterTracker;
use crate::error::Result;
use crate::graph::{StoryGraph, StoryNode};

/// Placeholder in node text replaced with the student's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

const NEVERMORE_SOURCE: &str = include_str!("../../content/nevermore.toml");

/// Chapter progression as authored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterContent {
    pub initial: String,
    pub milestones: Vec<String>,
    pub labels: Vec<String>,
    #[serde(default)]
    pub objectives: HashMap<String, String>,
    #[serde(default)]
    pub fallback_objective: String,
}

/// A complete story document.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryContent {
    pub chapters: ChapterContent,
    #[serde(default)]
    pub nodes: Vec<StoryNode>,
}

impl StoryContent {
    /// Parse a story document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The bundled Nevermore Academy story.
    pub fn nevermore() -> Result<Self> {
        Self::from_toml_str(NEVERMORE_SOURCE)
    }

    /// Build the graph and chapter tracker for one student.
    ///
    /// Fails on duplicate node ids or inconsistent chapter tables.
    pub fn build(&self, student_name: &str) -> Result<(StoryGraph, ChapterTracker)> {
        let nodes = self.nodes.iter().cloned().map(|mut node| {
            node.text = node.text.replace(NAME_PLACEHOLDER, student_name);
            node
        });
        let graph = StoryGraph::from_nodes(nodes)?;

        let chapters = &self.chapters;
        let tracker = ChapterTracker::new(
            chapters.initial.clone(),
            chapters.milestones.clone(),
            chapters.labels.clone(),
        )?
        .with_objectives(chapters.objectives.clone(), chapters.fallback_objective.clone());

        for milestone in tracker.milestones() {
            if !graph.contains(milestone) {
                tracing::warn!(milestone = %milestone, "Chapter milestone is not a story node");
            }
        }
        for (node_id, missing) in graph.dangling_links() {
            tracing::warn!(node = node_id, missing = missing, "Choice points at an unknown node");
        }

        tracing::debug!(
            nodes = graph.node_count(),
            milestones = tracker.milestones().len(),
            "Story content built"
        );
        Ok((graph, tracker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryError;

    #[test]
    fn test_nevermore_loads() {
        let content = StoryContent::nevermore().unwrap();
        let (graph, tracker) = content.build("Morticia").unwrap();

        assert_eq!(graph.node_count(), 23);
        assert_eq!(tracker.current_chapter(), "orientation");
        assert_eq!(
            tracker.objective(),
            "Check in with Principal Weems in the courtyard."
        );
        for milestone in tracker.milestones() {
            assert!(graph.contains(milestone));
        }
        assert!(graph.dangling_links().is_empty());
    }

    #[test]
    fn test_name_is_substituted() {
        let (graph, _) = StoryContent::nevermore().unwrap().build("Morticia").unwrap();
        let intro = graph.get_node("intro_welcome").unwrap();

        assert!(intro.text.starts_with("Welcome to Nevermore Academy, Morticia."));
        assert!(!intro.text.contains(NAME_PLACEHOLDER));
        assert_eq!(intro.grants_item.as_deref(), Some("Student Crest"));
        assert_eq!(intro.emotion.as_deref(), Some("warm"));
    }

    #[test]
    fn test_choice_order_is_preserved() {
        let (graph, _) = StoryContent::nevermore().unwrap().build("X").unwrap();
        let enid = graph.get_node("enid_room").unwrap();
        let labels: Vec<_> = enid.choices.iter().map(|c| c.text.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Excited to explore.",
                "Nervous about fitting in.",
                "Hoping to understand my visions.",
            ]
        );
    }

    #[test]
    fn test_duplicate_node_fails_build() {
        let content = StoryContent::from_toml_str(
            r#"
            [chapters]
            initial = "start"
            milestones = ["a"]
            labels = []

            [[nodes]]
            id = "a"
            speaker = "One"
            text = "First."

            [[nodes]]
            id = "a"
            speaker = "Two"
            text = "Second."
            "#,
        )
        .unwrap();

        let err = content.build("X").unwrap_err();
        assert!(matches!(err, StoryError::DuplicateNode { ref node_id } if node_id == "a"));
    }

    #[test]
    fn test_dangling_choice_still_builds() {
        let content = StoryContent::from_toml_str(
            r#"
            [chapters]
            initial = "start"
            milestones = ["a"]
            labels = []

            [[nodes]]
            id = "a"
            speaker = "One"
            text = "First."

            [[nodes.choices]]
            text = "Onward."
            next = "nowhere"
            "#,
        )
        .unwrap();

        let (graph, _) = content.build("X").unwrap();
        assert_eq!(graph.dangling_links(), vec![("a", "nowhere")]);
    }

    #[test]
    fn test_malformed_content() {
        let result = StoryContent::from_toml_str("[[nodes]]\nid = 3\n");
        assert!(matches!(result, Err(StoryError::ContentParse(_))));
    }
}
