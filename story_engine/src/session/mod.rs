//! Dialogue session - the live cursor through the story graph.
//!
//! A session is either idle or active on exactly one node. It owns the
//! student's inventory and the log of completed nodes for the whole
//! playthrough; individual conversations come and go through it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::SessionError;
use crate::graph::{StoryGraph, StoryNode};

/// Unique identifier for one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    /// Create a new random conversation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two states of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    Active {
        conversation: ConversationId,
        node_id: String,
    },
}

/// Why a conversation closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The chosen edge (or a choice-less node) ends the conversation.
    Terminal,
    /// The chosen edge points at a node that does not exist.
    BrokenReference { missing_node_id: String },
    /// The player dismissed the conversation.
    Cancelled,
}

/// Report for a closed conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEnd {
    pub conversation: ConversationId,
    /// The node the conversation was on when it closed.
    pub last_node_id: String,
    /// Nodes completed during this conversation, in order.
    pub completed_nodes: Vec<String>,
    pub reason: EndReason,
}

/// Where the session went after leaving a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continued { node_id: String },
    Ended(DialogueEnd),
}

/// Result of successfully leaving a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceResult {
    pub left_node_id: String,
    /// Items appended to the inventory by this step, in order.
    pub items_gained: Vec<String>,
    pub transition: Transition,
}

/// The traversal cursor plus everything a playthrough accumulates.
#[derive(Debug, Clone, Default)]
pub struct DialogueSession {
    state: DialogueState,
    selected_choice: usize,
    /// Append-only log; a node appears once per time it was left.
    completed_nodes: Vec<String>,
    /// Membership index over `completed_nodes` for the one-time item grants.
    completed_set: HashSet<String>,
    inventory: Vec<String>,
    /// Nodes completed since the current conversation started.
    conversation_nodes: Vec<String>,
}

impl DialogueSession {
    /// Create an idle session with an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DialogueState::Active { .. })
    }

    pub fn current_node_id(&self) -> Option<&str> {
        match &self.state {
            DialogueState::Active { node_id, .. } => Some(node_id),
            DialogueState::Idle => None,
        }
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        match &self.state {
            DialogueState::Active { conversation, .. } => Some(*conversation),
            DialogueState::Idle => None,
        }
    }

    /// Resolve the current node in the graph.
    pub fn current_node<'g>(&self, graph: &'g StoryGraph) -> Option<&'g StoryNode> {
        self.current_node_id().and_then(|id| graph.get_node(id))
    }

    /// Index of the highlighted choice.
    pub fn selected_choice(&self) -> usize {
        self.selected_choice
    }

    /// Every item collected so far, in the order received.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// The most recent `count` inventory entries, oldest first.
    pub fn recent_items(&self, count: usize) -> &[String] {
        let start = self.inventory.len().saturating_sub(count);
        &self.inventory[start..]
    }

    /// The full completion log.
    pub fn completed_nodes(&self) -> &[String] {
        &self.completed_nodes
    }

    pub fn has_completed(&self, node_id: &str) -> bool {
        self.completed_set.contains(node_id)
    }

    /// Open a conversation on `node_id`.
    ///
    /// Fails without changing anything if a conversation is already open or
    /// the id is not in the graph.
    pub fn start(
        &mut self,
        graph: &StoryGraph,
        node_id: &str,
    ) -> Result<ConversationId, SessionError> {
        if let Some(current) = self.current_node_id() {
            return Err(SessionError::AlreadyActive {
                node_id: current.to_string(),
            });
        }
        if !graph.contains(node_id) {
            return Err(SessionError::UnknownNode {
                node_id: node_id.to_string(),
            });
        }

        let conversation = ConversationId::new();
        self.state = DialogueState::Active {
            conversation,
            node_id: node_id.to_string(),
        };
        self.selected_choice = 0;
        self.conversation_nodes.clear();

        tracing::debug!(%conversation, node = node_id, "Dialogue started");
        Ok(conversation)
    }

    /// Move the highlighted choice by `delta`, clamped to the current node's
    /// choices. No-op while idle or on a node without choices.
    pub fn move_selection(&mut self, graph: &StoryGraph, delta: i32) {
        let Some(node) = self.current_node(graph) else {
            return;
        };
        if node.is_degenerate() {
            return;
        }
        let last = node.choice_count() as i64 - 1;
        self.selected_choice = (self.selected_choice as i64 + delta as i64).clamp(0, last) as usize;
    }

    /// Take the choice at `index` on the current node.
    ///
    /// In order: the node's item is granted if it has never been completed, the
    /// node is logged as completed, the choice's consequence is granted, and the
    /// cursor moves on. A missing or dangling target ends the conversation.
    pub fn choose(
        &mut self,
        graph: &StoryGraph,
        index: usize,
    ) -> Result<ChoiceResult, SessionError> {
        let node = self.active_node(graph)?;
        let Some(choice) = node.choices.get(index) else {
            return Err(SessionError::ChoiceOutOfRange {
                index,
                count: node.choice_count(),
            });
        };

        let mut items_gained = self.complete_node(node);
        if let Some(item) = &choice.consequence {
            self.inventory.push(item.clone());
            items_gained.push(item.clone());
        }

        let transition = match &choice.next_node_id {
            Some(next) if graph.contains(next) => {
                self.enter(next);
                Transition::Continued {
                    node_id: next.clone(),
                }
            }
            Some(missing) => {
                tracing::warn!(
                    node = %node.node_id,
                    missing = %missing,
                    "Choice points at an unknown node; ending dialogue"
                );
                Transition::Ended(self.close(
                    &node.node_id,
                    EndReason::BrokenReference {
                        missing_node_id: missing.clone(),
                    },
                ))
            }
            None => Transition::Ended(self.close(&node.node_id, EndReason::Terminal)),
        };

        tracing::debug!(node = %node.node_id, choice = index, "Dialogue choice taken");
        Ok(ChoiceResult {
            left_node_id: node.node_id.clone(),
            items_gained,
            transition,
        })
    }

    /// Take a choice by its 1-based numeric shortcut.
    ///
    /// Keys that do not name a choice are ignored and return `None`.
    pub fn choose_numeric(&mut self, graph: &StoryGraph, key: u8) -> Option<ChoiceResult> {
        let count = self.current_node(graph)?.choice_count();
        let index = (key as usize).checked_sub(1).filter(|index| *index < count)?;
        self.choose(graph, index).ok()
    }

    /// Confirm the highlighted choice. On a node without choices this
    /// completes the node and closes the conversation.
    pub fn confirm(&mut self, graph: &StoryGraph) -> Result<ChoiceResult, SessionError> {
        let node = self.active_node(graph)?;
        if !node.is_degenerate() {
            return self.choose(graph, self.selected_choice);
        }

        let items_gained = self.complete_node(node);
        let end = self.close(&node.node_id, EndReason::Terminal);
        Ok(ChoiceResult {
            left_node_id: node.node_id.clone(),
            items_gained,
            transition: Transition::Ended(end),
        })
    }

    /// Dismiss the open conversation without completing its current node.
    pub fn cancel(&mut self) -> Option<DialogueEnd> {
        let node_id = self.current_node_id()?.to_string();
        Some(self.close(&node_id, EndReason::Cancelled))
    }

    /// The current node, or the reason there is none.
    ///
    /// An active id that does not resolve in `graph` yields `UnknownNode` and
    /// leaves the session open, so the caller can still cancel it.
    fn active_node<'g>(&self, graph: &'g StoryGraph) -> Result<&'g StoryNode, SessionError> {
        let node_id = self.current_node_id().ok_or(SessionError::NotActive)?;
        graph.get_node(node_id).ok_or_else(|| SessionError::UnknownNode {
            node_id: node_id.to_string(),
        })
    }

    /// Grant the node's item if this is its first completion, then log it.
    fn complete_node(&mut self, node: &StoryNode) -> Vec<String> {
        let mut granted = Vec::new();
        if let Some(item) = &node.grants_item {
            if !self.completed_set.contains(&node.node_id) {
                self.inventory.push(item.clone());
                granted.push(item.clone());
            }
        }
        self.completed_nodes.push(node.node_id.clone());
        self.completed_set.insert(node.node_id.clone());
        self.conversation_nodes.push(node.node_id.clone());
        granted
    }

    fn enter(&mut self, node_id: &str) {
        if let DialogueState::Active { node_id: current, .. } = &mut self.state {
            *current = node_id.to_string();
        }
        self.selected_choice = 0;
    }

    fn close(&mut self, last_node_id: &str, reason: EndReason) -> DialogueEnd {
        let conversation = self.conversation_id().unwrap_or_default();
        self.state = DialogueState::Idle;
        self.selected_choice = 0;

        tracing::debug!(%conversation, last_node = last_node_id, ?reason, "Dialogue ended");
        DialogueEnd {
            conversation,
            last_node_id: last_node_id.to_string(),
            completed_nodes: std::mem::take(&mut self.conversation_nodes),
            reason,
        }
    }
}
