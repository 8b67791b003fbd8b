//! Axis-separated collision resolution of the player body against static platforms.
//!
//! Each tick the horizontal displacement is applied and resolved first, then the
//! vertical one. Resolving one axis at a time means a collision always has a
//! single unambiguous push direction, so corners never snag or let the body
//! slip through.

use serde::{Deserialize, Serialize};

use crate::body::PlayerBody;
use crate::input::MoveAxis;
use crate::level::Platform;

/// Which surfaces the body touched during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contacts {
    /// Pushed back out of a wall by the horizontal pass.
    pub wall: bool,
    /// Came to rest on a platform's top edge.
    pub landed: bool,
    /// Hit a platform's bottom edge while rising.
    pub head_bump: bool,
}

/// Resolves player movement against a fixed set of platforms.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver<'a> {
    platforms: &'a [Platform],
}

impl<'a> CollisionResolver<'a> {
    pub fn new(platforms: &'a [Platform]) -> Self {
        Self { platforms }
    }

    /// Run one full movement tick: integrate input and gravity, then resolve
    /// both axes.
    ///
    /// `on_ground` is cleared before resolution and only set again by a
    /// downward collision found this tick.
    pub fn step(
        &self,
        body: &mut PlayerBody,
        axis: MoveAxis,
        jump_pressed: bool,
        dt: f32,
    ) -> Contacts {
        let was_grounded = body.on_ground;
        let delta = body.integrate(axis, jump_pressed, dt);
        body.on_ground = false;

        let wall = self.resolve_horizontal(body, delta.x);
        let mut contacts = self.resolve_vertical(body, delta.y);
        contacts.wall = wall;

        if was_grounded != body.on_ground {
            tracing::trace!(
                grounded = body.on_ground,
                x = body.position.x,
                y = body.position.y,
                "Ground contact changed"
            );
        }

        contacts
    }

    /// Move the body by `dx` and push it out of any platform it now overlaps.
    ///
    /// Returns true if a wall stopped the movement.
    pub fn resolve_horizontal(&self, body: &mut PlayerBody, dx: f32) -> bool {
        body.position.x += dx;
        if dx == 0.0 {
            return false;
        }

        let mut blocked = false;
        for _ in 0..=self.platforms.len() {
            let rect = body.rect();
            let overlapping = self
                .platforms
                .iter()
                .filter(|platform| rect.overlaps(&platform.bounds));

            let resolved_x = if dx > 0.0 {
                overlapping
                    .map(|platform| flush_before(platform.bounds.left(), body.size.x))
                    .reduce(f32::min)
            } else {
                overlapping
                    .map(|platform| platform.bounds.right())
                    .reduce(f32::max)
            };

            match resolved_x {
                Some(x) => {
                    body.position.x = x;
                    blocked = true;
                }
                None => break,
            }
        }

        blocked
    }

    /// Move the body by `dy` and push it out of any platform it now overlaps.
    ///
    /// A downward collision grounds the body; any vertical collision stops
    /// vertical motion.
    pub fn resolve_vertical(&self, body: &mut PlayerBody, dy: f32) -> Contacts {
        body.position.y += dy;
        let mut contacts = Contacts::default();
        if dy == 0.0 {
            return contacts;
        }

        for _ in 0..=self.platforms.len() {
            let rect = body.rect();
            let overlapping = self
                .platforms
                .iter()
                .filter(|platform| rect.overlaps(&platform.bounds));

            let resolved_y = if dy > 0.0 {
                overlapping
                    .map(|platform| flush_before(platform.bounds.top(), body.size.y))
                    .reduce(f32::min)
            } else {
                overlapping
                    .map(|platform| platform.bounds.bottom())
                    .reduce(f32::max)
            };

            let Some(y) = resolved_y else {
                break;
            };

            body.position.y = y;
            body.velocity.y = 0.0;
            if dy > 0.0 {
                body.on_ground = true;
                contacts.landed = true;
            } else {
                contacts.head_bump = true;
            }
        }

        contacts
    }
}

/// The largest position whose far edge, `position + size`, does not pass
/// `edge`. Plain `edge - size` can round so the sum lands just past the edge.
fn flush_before(edge: f32, size: f32) -> f32 {
    let mut position = edge - size;
    while position + size > edge {
        position = next_down(position);
    }
    position
}

/// The next representable value below a finite `value`.
fn next_down(value: f32) -> f32 {
    if value == 0.0 {
        -f32::from_bits(1)
    } else if value > 0.0 {
        f32::from_bits(value.to_bits() - 1)
    } else {
        f32::from_bits(value.to_bits() + 1)
    }
}
