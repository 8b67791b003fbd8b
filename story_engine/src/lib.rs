//! # Story Engine
//!
//! The narrative half of Nevermore. This crate owns the dialogue graph, walks
//! it one choice at a time, tracks what the student has collected and which
//! chapter they are in, and drives the `platformer_rules` world around it.
//!
//! ## Core Components
//!
//! - **graph**: immutable story nodes and choices, keyed by node id
//! - **session**: the live cursor through the graph, with inventory and history
//! - **chapter**: maps completed milestone nodes to the next objective
//! - **content**: the authored story, loaded from TOML
//! - **world**: the per-tick orchestrator and its read-only view for rendering
//! - **events**: what happened during a tick, for the presentation layer
//!
//! ## Design Philosophy
//!
//! - **Explicit states**: a dialogue is either idle or active on one node, and
//!   the world checks that state before running physics
//! - **Recoverable by default**: only a malformed story aborts; broken links end
//!   a conversation instead of crashing it
//! - **Data out, not callbacks in**: the core reports events and exposes a view;
//!   it never calls into presentation code

pub mod chapter;
pub mod content;
pub mod error;
pub mod events;
pub mod graph;
pub mod session;
pub mod world;

pub use chapter::*;
pub use content::*;
pub use error::*;
pub use events::*;
pub use graph::*;
pub use session::*;
pub use world::*;
