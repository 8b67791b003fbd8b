//! Proximity trigger deciding when the world pauses for a conversation.

use crate::config::InteractionConfig;
use crate::geometry::Rect;
use crate::level::Npc;

/// Gate in front of NPC conversations: a proximity test plus a short cooldown
/// so one keypress cannot immediately reopen the same conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionGate {
    config: InteractionConfig,
    /// Seconds remaining before the next interaction is allowed. Never negative.
    cooldown_remaining: f32,
}

impl InteractionGate {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            cooldown_remaining: 0.0,
        }
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    /// The area around an NPC in which the player can start talking to it.
    pub fn reach(&self, npc: &Npc) -> Rect {
        npc.bounds.inflate(self.config.margin)
    }

    /// Count down the cooldown by the elapsed tick time.
    pub fn tick(&mut self, dt: f32) {
        self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
    }

    /// Find the first NPC, in level order, whose inflated bounds overlap the
    /// player.
    ///
    /// Does nothing while the cooldown runs or while a conversation is already
    /// open. A match restarts the cooldown; no match is not an error.
    pub fn try_interact<'a>(
        &mut self,
        player: Rect,
        npcs: &'a [Npc],
        dialogue_active: bool,
    ) -> Option<&'a Npc> {
        if dialogue_active || !self.is_ready() {
            return None;
        }

        let npc = npcs
            .iter()
            .find(|npc| player.overlaps(&self.reach(npc)))?;

        self.cooldown_remaining = self.config.cooldown;
        tracing::debug!(npc = %npc.name, node = %npc.dialogue_node_id, "NPC interaction triggered");
        Some(npc)
    }
}

impl Default for InteractionGate {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Rgb;

    fn npcs() -> Vec<Npc> {
        vec![
            Npc::new("Weems", Rect::new(600.0, 360.0, 40.0, 80.0), "intro_welcome", Rgb(1, 2, 3)),
            Npc::new("Enid", Rect::new(650.0, 360.0, 40.0, 80.0), "enid_room", Rgb(4, 5, 6)),
        ]
    }

    #[test]
    fn test_margin_extends_reach() {
        let mut gate = InteractionGate::default();
        let npcs = npcs();
        // 5 units left of Weems: outside the bounds, inside the margin.
        let player = Rect::new(559.0, 360.0, 36.0, 60.0);

        let npc = gate.try_interact(player, &npcs, false);
        assert_eq!(npc.map(|n| n.name.as_str()), Some("Weems"));
    }

    #[test]
    fn test_out_of_reach() {
        let mut gate = InteractionGate::default();
        let npcs = npcs();
        let player = Rect::new(100.0, 360.0, 36.0, 60.0);

        assert!(gate.try_interact(player, &npcs, false).is_none());
        assert!(gate.is_ready());
    }

    #[test]
    fn test_first_match_wins() {
        let mut gate = InteractionGate::default();
        let npcs = npcs();
        // Overlaps both Weems and Enid.
        let player = Rect::new(625.0, 360.0, 36.0, 60.0);

        let npc = gate.try_interact(player, &npcs, false).unwrap();
        assert_eq!(npc.name, "Weems");
    }

    #[test]
    fn test_cooldown_blocks_retrigger() {
        let mut gate = InteractionGate::default();
        let npcs = npcs();
        let player = Rect::new(600.0, 360.0, 36.0, 60.0);

        assert!(gate.try_interact(player, &npcs, false).is_some());
        gate.tick(0.2);
        assert!(gate.try_interact(player, &npcs, false).is_none());
        gate.tick(0.2);
        assert!(gate.try_interact(player, &npcs, false).is_none());
        gate.tick(0.2);
        assert!(gate.try_interact(player, &npcs, false).is_some());
    }

    #[test]
    fn test_active_dialogue_blocks() {
        let mut gate = InteractionGate::default();
        let npcs = npcs();
        let player = Rect::new(600.0, 360.0, 36.0, 60.0);

        assert!(gate.try_interact(player, &npcs, true).is_none());
        assert!(gate.is_ready());
    }

    #[test]
    fn test_cooldown_never_negative() {
        let mut gate = InteractionGate::default();
        gate.tick(10.0);
        assert_eq!(gate.cooldown_remaining(), 0.0);
    }
}
