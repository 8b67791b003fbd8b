//! # Platformer Rules
//!
//! The world-simulation crate for Nevermore: everything that moves, collides or
//! decides when the player may talk to someone. It holds no dialogue logic;
//! `story_engine` drives it one tick at a time and pauses it while a
//! conversation is open.
//!
//! ## Components
//!
//! - **geometry**: axis-aligned rectangles and overlap tests
//! - **body**: player position/velocity integration, jump and gravity
//! - **collision**: axis-separated resolution against static platforms
//! - **camera**: bounded view offset derived from the player position
//! - **level**: the authored campus platforms and NPC placements
//! - **interaction**: proximity trigger with a re-trigger cooldown
//! - **character**: the finished character configuration and appearance tables
//! - **input**: the per-tick input intent snapshot
//! - **config**: TOML-backed tuning values

pub mod body;
pub mod camera;
pub mod character;
pub mod collision;
pub mod config;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod level;

pub use body::*;
pub use camera::*;
pub use character::*;
pub use collision::*;
pub use config::*;
pub use geometry::*;
pub use input::*;
pub use interaction::*;
pub use level::*;
