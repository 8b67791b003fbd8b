//! The world orchestrator: one playthrough, advanced one tick at a time.
//!
//! Each tick reads a single input snapshot. While a conversation is open only
//! the dialogue reacts to input and the player body stays frozen; otherwise the
//! body moves and may open a conversation with a nearby NPC.

mod view;

pub use view::*;

use platformer_rules::{
    CameraClamp, CharacterConfig, CollisionResolver, InputIntent, InteractionGate, Level,
    PlayerBody, RulesConfig, Vec2,
};

use crate::chapter::ChapterTracker;
use crate::content::StoryContent;
use crate::error::Result;
use crate::events::WorldEvent;
use crate::graph::StoryGraph;
use crate::session::{ChoiceResult, DialogueEnd, DialogueSession, Transition};

/// All state of one playthrough.
#[derive(Debug, Clone)]
pub struct StoryWorld {
    character: CharacterConfig,
    level: Level,
    body: PlayerBody,
    camera: CameraClamp,
    camera_offset: Vec2,
    gate: InteractionGate,
    graph: StoryGraph,
    session: DialogueSession,
    chapters: ChapterTracker,
    active_npc: Option<String>,
}

impl StoryWorld {
    /// Start a playthrough on the campus with the bundled story and default
    /// tuning.
    pub fn new(character: CharacterConfig) -> Result<Self> {
        Self::with_parts(
            character,
            RulesConfig::default(),
            Level::campus(),
            &StoryContent::nevermore()?,
        )
    }

    /// Start a playthrough from explicit parts.
    ///
    /// Fails only if the story content is malformed.
    pub fn with_parts(
        character: CharacterConfig,
        rules: RulesConfig,
        level: Level,
        content: &StoryContent,
    ) -> Result<Self> {
        let (graph, chapters) = content.build(&character.name)?;
        let body = PlayerBody::new(rules.movement);
        let camera = CameraClamp::new(rules.camera);
        let camera_offset = camera.offset(body.rect());

        tracing::info!(
            student = %character.name,
            heritage = character.race().label,
            nodes = graph.node_count(),
            npcs = level.npcs().len(),
            "Story world created"
        );

        Ok(Self {
            character,
            level,
            body,
            camera,
            camera_offset,
            gate: InteractionGate::new(rules.interaction),
            graph,
            session: DialogueSession::new(),
            chapters,
            active_npc: None,
        })
    }

    pub fn character(&self) -> &CharacterConfig {
        &self.character
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn body(&self) -> &PlayerBody {
        &self.body
    }

    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    pub fn session(&self) -> &DialogueSession {
        &self.session
    }

    pub fn chapters(&self) -> &ChapterTracker {
        &self.chapters
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera_offset
    }

    pub fn in_dialogue(&self) -> bool {
        self.session.is_active()
    }

    /// Move the player directly to `position` and stop it. Intended for
    /// scripted runs and debugging; ignored while a conversation is open.
    pub fn place_player(&mut self, position: Vec2) {
        if self.session.is_active() {
            return;
        }
        self.body.position = position;
        self.body.velocity = Vec2::ZERO;
        self.body.on_ground = false;
        self.camera_offset = self.camera.offset(self.body.rect());
    }

    /// Place the player beside the named NPC, trying its left side first, and
    /// let the body settle for one tick. Returns whether the NPC is then within
    /// reach. Intended for scripted runs.
    pub fn approach_npc(&mut self, name: &str, dt: f32) -> bool {
        let Some(npc) = self.level.npc(name) else {
            return false;
        };
        let bounds = npc.bounds;
        let reach = self.gate.reach(npc);
        let candidates = [
            Vec2::new(bounds.left() - self.body.size.x + 6.0, bounds.top()),
            Vec2::new(bounds.right() - 6.0, bounds.top()),
        ];

        for position in candidates {
            if self.session.is_active() {
                return false;
            }
            self.place_player(position);
            self.tick(&InputIntent::idle(), dt);
            if self.body.rect().overlaps(&reach) {
                return true;
            }
        }
        false
    }

    /// Advance the world by `dt` seconds using one input snapshot.
    pub fn tick(&mut self, intent: &InputIntent, dt: f32) -> Vec<WorldEvent> {
        let mut events = Vec::new();
        self.gate.tick(dt);

        if self.session.is_active() {
            self.handle_dialogue_input(intent, &mut events);
        } else {
            let resolver = CollisionResolver::new(self.level.platforms());
            resolver.step(&mut self.body, intent.move_axis, intent.jump_pressed, dt);

            if intent.interact_pressed {
                self.try_open_dialogue(&mut events);
            }
        }

        self.camera_offset = self.camera.offset(self.body.rect());

        for event in &events {
            tracing::trace!(kind = event.kind(), "World event");
        }
        events
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> WorldView {
        let dialogue = self.session.current_node(&self.graph).and_then(|node| {
            Some(DialogueView {
                conversation: self.session.conversation_id()?,
                npc: self.active_npc.clone(),
                node_id: node.node_id.clone(),
                speaker: node.speaker.clone(),
                text: node.text.clone(),
                emotion: node.emotion.clone(),
                choices: node.choices.iter().map(|c| c.text.clone()).collect(),
                selected_choice: self.session.selected_choice(),
            })
        });

        WorldView {
            player: self.body.rect(),
            on_ground: self.body.on_ground,
            camera: self.camera_offset,
            dialogue,
            student_name: self.character.name.clone(),
            heritage: self.character.race().label.to_string(),
            chapter: self.chapters.current_chapter().to_string(),
            objective: self.chapters.objective().to_string(),
            inventory_preview: self.session.recent_items(INVENTORY_PREVIEW_LEN).to_vec(),
        }
    }

    fn try_open_dialogue(&mut self, events: &mut Vec<WorldEvent>) {
        let Some(npc) =
            self.gate
                .try_interact(self.body.rect(), self.level.npcs(), self.session.is_active())
        else {
            return;
        };

        match self.session.start(&self.graph, &npc.dialogue_node_id) {
            Ok(conversation) => {
                self.active_npc = Some(npc.name.clone());
                events.push(WorldEvent::DialogueStarted {
                    conversation,
                    npc: npc.name.clone(),
                    node_id: npc.dialogue_node_id.clone(),
                });
            }
            Err(err) => {
                tracing::warn!(npc = %npc.name, error = %err, "Could not open dialogue");
                events.push(WorldEvent::DialogueUnavailable {
                    npc: npc.name.clone(),
                    node_id: npc.dialogue_node_id.clone(),
                });
            }
        }
    }

    fn handle_dialogue_input(&mut self, intent: &InputIntent, events: &mut Vec<WorldEvent>) {
        if intent.cancel_pressed {
            if let Some(end) = self.session.cancel() {
                self.finish_dialogue(end, events);
            }
            return;
        }

        if let Some(key) = intent.numeric_choice {
            if let Some(result) = self.session.choose_numeric(&self.graph, key) {
                self.apply_choice(result, events);
                return;
            }
        }

        if intent.confirm_pressed {
            match self.session.confirm(&self.graph) {
                Ok(result) => self.apply_choice(result, events),
                Err(err) => tracing::warn!(error = %err, "Dialogue confirm failed"),
            }
            return;
        }

        if intent.menu_up {
            self.session.move_selection(&self.graph, -1);
        }
        if intent.menu_down {
            self.session.move_selection(&self.graph, 1);
        }
    }

    fn apply_choice(&mut self, result: ChoiceResult, events: &mut Vec<WorldEvent>) {
        events.extend(
            result
                .items_gained
                .into_iter()
                .map(|item| WorldEvent::ItemGained { item }),
        );

        match result.transition {
            Transition::Continued { node_id } => {
                events.push(WorldEvent::DialogueAdvanced { node_id });
            }
            Transition::Ended(end) => self.finish_dialogue(end, events),
        }
    }

    /// Close out a conversation: release the NPC and advance the chapter over
    /// every node the conversation completed, so the last milestone wins.
    fn finish_dialogue(&mut self, end: DialogueEnd, events: &mut Vec<WorldEvent>) {
        self.active_npc = None;
        events.push(WorldEvent::DialogueEnded {
            conversation: end.conversation,
            last_node_id: end.last_node_id.clone(),
            reason: end.reason.clone(),
        });

        let before = self.chapters.current_chapter().to_string();
        for node_id in &end.completed_nodes {
            self.chapters.advance(node_id);
        }
        let after = self.chapters.current_chapter();
        if after != before {
            events.push(WorldEvent::ChapterAdvanced {
                from: before,
                to: after.to_string(),
            });
        }
    }
}
