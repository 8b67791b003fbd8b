//! Player body: position and velocity integration with jump and gravity rules.

use serde::{Deserialize, Serialize};

use crate::config::MovementConfig;
use crate::geometry::{Rect, Vec2};
use crate::input::MoveAxis;

/// The player's physical state in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    /// Whether a platform supported the body during the last resolved tick.
    pub on_ground: bool,
    tuning: MovementConfig,
}

impl PlayerBody {
    /// Create a body at the configured spawn point, at rest and airborne.
    pub fn new(tuning: MovementConfig) -> Self {
        Self {
            position: tuning.spawn,
            velocity: Vec2::ZERO,
            size: Vec2::new(tuning.width, tuning.height),
            on_ground: false,
            tuning,
        }
    }

    /// Place the body at a specific position, keeping its tuning.
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn tuning(&self) -> &MovementConfig {
        &self.tuning
    }

    /// The body's current bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }

    /// Apply one tick of input and gravity to the velocity and return the
    /// displacement to attempt this tick.
    ///
    /// Horizontal velocity snaps to the input direction. A jump only starts
    /// from the ground state left by the previous tick's resolution.
    pub fn integrate(&mut self, axis: MoveAxis, jump_pressed: bool, dt: f32) -> Vec2 {
        self.velocity.x = axis.sign() * self.tuning.speed;

        if jump_pressed && self.on_ground {
            self.velocity.y = -self.tuning.jump_force;
            self.on_ground = false;
        }

        self.velocity.y = (self.velocity.y + self.tuning.gravity * dt)
            .min(self.tuning.terminal_velocity);

        Vec2::new(self.velocity.x * dt, self.velocity.y * dt)
    }
}
