//! Story graph - every dialogue node, keyed by id.
//!
//! The graph is built once before play starts and only read afterwards.
//! Choices may point at ids that are not registered; those dangling links are
//! resolved (as endings) by the dialogue session, not rejected here.

mod node;

pub use node::*;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Result, StoryError};

/// All dialogue nodes of a story.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    nodes: HashMap<String, StoryNode>,
}

impl StoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of nodes, failing on the first duplicate id.
    pub fn from_nodes(nodes: impl IntoIterator<Item = StoryNode>) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        Ok(graph)
    }

    /// Register a node under its id.
    pub fn add_node(&mut self, node: StoryNode) -> Result<()> {
        if self.nodes.contains_key(&node.node_id) {
            return Err(StoryError::duplicate_node(node.node_id));
        }
        self.nodes.insert(node.node_id.clone(), node);
        Ok(())
    }

    /// Get a node by id.
    pub fn get_node(&self, node_id: &str) -> Option<&StoryNode> {
        self.nodes.get(node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Collect every node reachable from `start` by following choices,
    /// breadth-first, including `start` itself. Dangling links are skipped.
    pub fn reachable_from(&self, start: &str) -> Vec<&StoryNode> {
        let mut reachable = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(start);

        while let Some(node_id) = queue.pop_front() {
            let Some(node) = self.nodes.get(node_id) else {
                continue;
            };
            if !visited.insert(node.node_id.as_str()) {
                continue;
            }
            reachable.push(node);

            for next in node.choices.iter().filter_map(|c| c.next_node_id.as_deref()) {
                if !visited.contains(next) {
                    queue.push_back(next);
                }
            }
        }

        reachable
    }

    /// Find every `(node id, target id)` pair whose target is not registered.
    pub fn dangling_links(&self) -> Vec<(&str, &str)> {
        let mut links: Vec<_> = self
            .nodes
            .values()
            .flat_map(|node| {
                node.choices
                    .iter()
                    .filter_map(|c| c.next_node_id.as_deref())
                    .filter(move |next| !self.nodes.contains_key(*next))
                    .map(move |next| (node.node_id.as_str(), next))
            })
            .collect();
        links.sort_unstable();
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> StoryGraph {
        StoryGraph::from_nodes([
            StoryNode::new("a", "Weems", "Start.")
                .with_choice(StoryChoice::to("Go on.", "b"))
                .with_choice(StoryChoice::to("Detour.", "c")),
            StoryNode::new("b", "Weems", "Middle.").with_choice(StoryChoice::to("Back.", "a")),
            StoryNode::new("c", "Weems", "Side.").with_choice(StoryChoice::to("Lost.", "missing")),
            StoryNode::new("island", "Narrator", "Unreachable.")
                .with_choice(StoryChoice::end("Ok.")),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_and_get_node() {
        let mut graph = StoryGraph::new();
        graph
            .add_node(StoryNode::new("intro", "Weems", "Welcome."))
            .unwrap();

        let node = graph.get_node("intro");
        assert!(node.is_some());
        assert_eq!(node.unwrap().speaker, "Weems");
        assert!(graph.get_node("outro").is_none());
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut graph = StoryGraph::new();
        graph
            .add_node(StoryNode::new("intro", "Weems", "Welcome."))
            .unwrap();

        let err = graph
            .add_node(StoryNode::new("intro", "Enid", "Hi!"))
            .unwrap_err();

        assert!(matches!(err, StoryError::DuplicateNode { ref node_id } if node_id == "intro"));
        assert!(err.to_string().contains("intro"));
        assert_eq!(graph.get_node("intro").unwrap().speaker, "Weems");
    }

    #[test]
    fn test_from_nodes_fails_on_duplicate() {
        let result = StoryGraph::from_nodes([
            StoryNode::new("x", "A", "1"),
            StoryNode::new("x", "B", "2"),
        ]);
        assert!(matches!(result, Err(StoryError::DuplicateNode { .. })));
    }

    #[test]
    fn test_dangling_links_are_allowed() {
        let graph = sample_graph();
        assert!(graph.contains("c"));
        assert_eq!(graph.dangling_links(), vec![("c", "missing")]);
    }

    #[test]
    fn test_reachable_from() {
        let graph = sample_graph();

        let mut ids: Vec<_> = graph
            .reachable_from("a")
            .iter()
            .map(|n| n.node_id.as_str())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b", "c"]);

        assert!(graph.reachable_from("missing").is_empty());
    }
}
