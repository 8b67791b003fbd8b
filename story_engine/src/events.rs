//! World events - what happened during a tick, reported to the presentation layer.

use serde::Serialize;

use crate::session::{ConversationId, EndReason};

/// Something observable that happened during one world tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WorldEvent {
    /// The player opened a conversation with an NPC.
    DialogueStarted {
        conversation: ConversationId,
        npc: String,
        node_id: String,
    },

    /// The conversation moved on to another node.
    DialogueAdvanced { node_id: String },

    /// An item was appended to the inventory.
    ItemGained { item: String },

    /// The conversation closed and free movement resumes.
    DialogueEnded {
        conversation: ConversationId,
        last_node_id: String,
        reason: EndReason,
    },

    /// The chapter changed after a conversation.
    ChapterAdvanced { from: String, to: String },

    /// An NPC's entry node does not exist; nothing was opened.
    DialogueUnavailable { npc: String, node_id: String },
}

impl WorldEvent {
    /// Short name of the event kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            WorldEvent::DialogueStarted { .. } => "dialogue_started",
            WorldEvent::DialogueAdvanced { .. } => "dialogue_advanced",
            WorldEvent::ItemGained { .. } => "item_gained",
            WorldEvent::DialogueEnded { .. } => "dialogue_ended",
            WorldEvent::ChapterAdvanced { .. } => "chapter_advanced",
            WorldEvent::DialogueUnavailable { .. } => "dialogue_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind() {
        let event = WorldEvent::ItemGained {
            item: "Dorm Key".into(),
        };
        assert_eq!(event.kind(), "item_gained");
    }

    #[test]
    fn test_event_serializes() {
        let event = WorldEvent::ChapterAdvanced {
            from: "orientation".into(),
            to: "roommate".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["ChapterAdvanced"]["to"], "roommate");
    }
}
