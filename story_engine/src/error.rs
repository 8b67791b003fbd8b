//! Error types for story loading and dialogue traversal.

use thiserror::Error;

/// Errors raised while building the story. These are fatal at startup.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Two nodes were registered with the same id.
    #[error("Duplicate story node id: {node_id}")]
    DuplicateNode { node_id: String },

    #[error("Failed to parse story content: {0}")]
    ContentParse(#[from] toml::de::Error),

    #[error("Invalid story content: {0}")]
    InvalidContent(String),
}

impl StoryError {
    pub fn duplicate_node(node_id: impl Into<String>) -> Self {
        Self::DuplicateNode {
            node_id: node_id.into(),
        }
    }

    pub fn invalid_content(msg: impl Into<String>) -> Self {
        Self::InvalidContent(msg.into())
    }
}

/// Errors returned by dialogue session operations.
///
/// A failed operation never leaves the session partially updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No dialogue is active")]
    NotActive,

    #[error("A dialogue is already active on node {node_id}")]
    AlreadyActive { node_id: String },

    #[error("Choice {index} is out of range ({count} choices available)")]
    ChoiceOutOfRange { index: usize, count: usize },

    #[error("Story node not found: {node_id}")]
    UnknownNode { node_id: String },
}

pub type Result<T> = std::result::Result<T, StoryError>;
