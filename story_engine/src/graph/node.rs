//! Story node definitions - the units of dialogue in the graph.

use serde::{Deserialize, Serialize};

/// A labeled edge out of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChoice {
    pub text: String,

    /// Node to continue with. `None` ends the conversation.
    #[serde(rename = "next", default)]
    pub next_node_id: Option<String>,

    /// Item appended to the inventory when this choice is taken.
    #[serde(default)]
    pub consequence: Option<String>,
}

impl StoryChoice {
    /// Create a choice leading to another node.
    pub fn to(text: impl Into<String>, next_node_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_node_id: Some(next_node_id.into()),
            consequence: None,
        }
    }

    /// Create a choice that ends the conversation.
    pub fn end(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_node_id: None,
            consequence: None,
        }
    }

    /// Set the item granted by taking this choice.
    pub fn with_consequence(mut self, item: impl Into<String>) -> Self {
        self.consequence = Some(item.into());
        self
    }
}

/// One unit of dialogue: a speaker, a body of text and the ordered choices
/// leading out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    #[serde(rename = "id")]
    pub node_id: String,

    pub speaker: String,

    pub text: String,

    /// Order matters: choices are numbered and selected by position.
    #[serde(default)]
    pub choices: Vec<StoryChoice>,

    /// Item awarded the first time this node is left through a choice.
    #[serde(default)]
    pub grants_item: Option<String>,

    /// Presentation hint only.
    #[serde(default)]
    pub emotion: Option<String>,
}

impl StoryNode {
    /// Create a node with no choices.
    pub fn new(
        node_id: impl Into<String>,
        speaker: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            speaker: speaker.into(),
            text: text.into(),
            choices: Vec::new(),
            grants_item: None,
            emotion: None,
        }
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: StoryChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Set the item this node grants.
    pub fn with_grants_item(mut self, item: impl Into<String>) -> Self {
        self.grants_item = Some(item.into());
        self
    }

    /// Set the emotion hint.
    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// A node without choices can only be dismissed.
    pub fn is_degenerate(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = StoryNode::new("intro", "Weems", "Welcome.")
            .with_choice(StoryChoice::to("Ready.", "next").with_consequence("confidence"))
            .with_choice(StoryChoice::end("Bye."))
            .with_grants_item("Student Crest")
            .with_emotion("warm");

        assert_eq!(node.choice_count(), 2);
        assert_eq!(node.choices[0].next_node_id.as_deref(), Some("next"));
        assert_eq!(node.choices[0].consequence.as_deref(), Some("confidence"));
        assert!(node.choices[1].next_node_id.is_none());
        assert_eq!(node.grants_item.as_deref(), Some("Student Crest"));
        assert_eq!(node.emotion.as_deref(), Some("warm"));
        assert!(!node.is_degenerate());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let node: StoryNode = toml::from_str(
            r#"
            id = "hint"
            speaker = "Weems"
            text = "Follow the sparkles."

            [[choices]]
            text = "Thanks."
            "#,
        )
        .unwrap();

        assert_eq!(node.node_id, "hint");
        assert_eq!(node.choices, vec![StoryChoice::end("Thanks.")]);
        assert!(node.grants_item.is_none());
        assert!(node.emotion.is_none());
    }

    #[test]
    fn test_degenerate_node() {
        assert!(StoryNode::new("empty", "Narrator", "...").is_degenerate());
    }
}
