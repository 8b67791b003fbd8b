//! Level layout: static platforms and NPC placements.
//!
//! A level is built once and never mutated during play.

use serde::{Deserialize, Serialize};

use crate::character::Rgb;
use crate::geometry::Rect;

/// A static, solid rectangle the player can stand on or bump into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Rect,
}

impl Platform {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

/// A non-player character standing in the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub bounds: Rect,
    /// Entry node of this character's conversation.
    pub dialogue_node_id: String,
    /// Presentation only.
    pub color: Rgb,
}

impl Npc {
    pub fn new(
        name: impl Into<String>,
        bounds: Rect,
        dialogue_node_id: impl Into<String>,
        color: Rgb,
    ) -> Self {
        Self {
            name: name.into(),
            bounds,
            dialogue_node_id: dialogue_node_id.into(),
            color,
        }
    }
}

/// Ground line of the campus, measured from the top of the world.
const GROUND_Y: f32 = 420.0;

/// The platforms and NPCs of one playable level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    platforms: Vec<Platform>,
    npcs: Vec<Npc>,
}

impl Level {
    /// Create a level from its platforms and NPCs. NPC order is the order the
    /// interaction trigger scans them in.
    pub fn new(platforms: Vec<Platform>, npcs: Vec<Npc>) -> Self {
        Self { platforms, npcs }
    }

    /// The Nevermore courtyard: a long ground slab, a run of steps and three
    /// balconies, with six students and staff to talk to.
    pub fn campus() -> Self {
        let ground = [Rect::new(-400.0, GROUND_Y, 2200.0, 120.0)];
        let steps = [
            Rect::new(200.0, 320.0, 180.0, 24.0),
            Rect::new(440.0, 260.0, 160.0, 24.0),
            Rect::new(700.0, 340.0, 220.0, 24.0),
            Rect::new(1020.0, 280.0, 180.0, 24.0),
            Rect::new(1320.0, 360.0, 220.0, 24.0),
        ];
        let balconies = [
            Rect::new(1650.0, 220.0, 300.0, 20.0),
            Rect::new(2050.0, 300.0, 200.0, 20.0),
            Rect::new(2400.0, 380.0, 400.0, 20.0),
        ];
        let platforms = ground
            .into_iter()
            .chain(steps)
            .chain(balconies)
            .map(Platform::new)
            .collect();

        let npc_bounds = |x: f32, y: f32| Rect::new(x, y, 40.0, 80.0);
        let npcs = vec![
            Npc::new(
                "Principal Weems",
                npc_bounds(600.0, 360.0),
                "intro_welcome",
                Rgb(160, 120, 200),
            ),
            Npc::new("Enid", npc_bounds(900.0, 360.0), "enid_room", Rgb(220, 160, 200)),
            Npc::new("Ajax", npc_bounds(1300.0, 360.0), "ajax_greenhouse", Rgb(150, 200, 150)),
            Npc::new("Yoko", npc_bounds(1700.0, 300.0), "yoko_duel", Rgb(200, 80, 80)),
            Npc::new("Wednesday", npc_bounds(2300.0, 360.0), "wednesday_pact", Rgb(60, 60, 80)),
            Npc::new("Bianca", npc_bounds(2600.0, 360.0), "bianca_finale", Rgb(80, 120, 200)),
        ];

        Self::new(platforms, npcs)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Look up an NPC by display name.
    pub fn npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_layout() {
        let level = Level::campus();
        assert_eq!(level.platforms().len(), 9);
        assert_eq!(level.npcs().len(), 6);
        assert_eq!(level.platforms()[0].bounds.top(), GROUND_Y);
    }

    #[test]
    fn test_campus_npc_entry_nodes() {
        let level = Level::campus();
        let entries: Vec<_> = level
            .npcs()
            .iter()
            .map(|npc| npc.dialogue_node_id.as_str())
            .collect();

        assert_eq!(
            entries,
            vec![
                "intro_welcome",
                "enid_room",
                "ajax_greenhouse",
                "yoko_duel",
                "wednesday_pact",
                "bianca_finale",
            ]
        );
    }

    #[test]
    fn test_npc_lookup() {
        let level = Level::campus();
        let ajax = level.npc("Ajax").unwrap();
        assert_eq!(ajax.dialogue_node_id, "ajax_greenhouse");
        assert!(level.npc("Thing").is_none());
    }

    #[test]
    fn test_platforms_do_not_overlap_each_other() {
        let level = Level::campus();
        let platforms = level.platforms();
        for (i, a) in platforms.iter().enumerate() {
            for b in &platforms[i + 1..] {
                assert!(!a.bounds.overlaps(&b.bounds));
            }
        }
    }
}
