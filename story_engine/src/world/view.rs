//! Read-only snapshot of the world for the rendering layer.

use platformer_rules::{Rect, Vec2};
use serde::Serialize;

use crate::session::ConversationId;

/// Number of inventory entries shown in the HUD preview.
pub const INVENTORY_PREVIEW_LEN: usize = 2;

/// The open conversation as the dialogue box shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogueView {
    pub conversation: ConversationId,
    pub npc: Option<String>,
    pub node_id: String,
    pub speaker: String,
    pub text: String,
    pub emotion: Option<String>,
    /// Choice labels in display order; shown numbered from 1.
    pub choices: Vec<String>,
    pub selected_choice: usize,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldView {
    pub player: Rect,
    pub on_ground: bool,
    pub camera: Vec2,
    pub dialogue: Option<DialogueView>,
    pub student_name: String,
    pub heritage: String,
    pub chapter: String,
    pub objective: String,
    /// The most recent inventory entries, oldest first.
    pub inventory_preview: Vec<String>,
}
