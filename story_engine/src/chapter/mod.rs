//! Chapter progression driven by milestone nodes.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{Result, StoryError};

/// Chapter set after the final milestone.
pub const EPILOGUE: &str = "epilogue";

/// Tracks the current chapter and its objective text.
///
/// Holds an ordered list of milestone node ids and a list of chapter labels one
/// shorter: completing the Nth milestone moves to the Nth label, completing
/// the last one moves to [`EPILOGUE`]. Every other node leaves the chapter alone.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterTracker {
    milestones: Vec<String>,
    labels: Vec<String>,
    current: String,
    objectives: HashMap<String, String>,
    fallback_objective: String,
}

impl ChapterTracker {
    /// Create a tracker starting at `initial`.
    ///
    /// Fails unless there is at least one milestone and exactly one label fewer
    /// than milestones.
    pub fn new(
        initial: impl Into<String>,
        milestones: Vec<String>,
        labels: Vec<String>,
    ) -> Result<Self> {
        if milestones.is_empty() {
            return Err(StoryError::invalid_content("chapter milestones are empty"));
        }
        if labels.len() + 1 != milestones.len() {
            return Err(StoryError::invalid_content(format!(
                "{} chapter labels for {} milestones; expected {}",
                labels.len(),
                milestones.len(),
                milestones.len() - 1
            )));
        }

        Ok(Self {
            milestones,
            labels,
            current: initial.into(),
            objectives: HashMap::new(),
            fallback_objective: String::new(),
        })
    }

    /// Attach objective texts keyed by chapter, and the text shown for chapters
    /// without one.
    pub fn with_objectives(
        mut self,
        objectives: HashMap<String, String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.objectives = objectives;
        self.fallback_objective = fallback.into();
        self
    }

    pub fn current_chapter(&self) -> &str {
        &self.current
    }

    /// The objective text for the current chapter.
    pub fn objective(&self) -> &str {
        self.objectives
            .get(&self.current)
            .map(String::as_str)
            .unwrap_or(&self.fallback_objective)
    }

    pub fn milestones(&self) -> &[String] {
        &self.milestones
    }

    /// Record a completed node. Returns the new chapter if `node_id` is a
    /// milestone, `None` otherwise.
    pub fn advance(&mut self, node_id: &str) -> Option<&str> {
        let position = self.milestones.iter().position(|m| m == node_id)?;
        let next = self
            .labels
            .get(position)
            .map(String::as_str)
            .unwrap_or(EPILOGUE);

        if next != self.current {
            tracing::info!(
                from = %self.current,
                to = next,
                milestone = node_id,
                "Chapter advanced"
            );
        }
        self.current = next.to_string();
        Some(&self.current)
    }
}
