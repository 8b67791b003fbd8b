//! The abstract per-tick input snapshot.
//!
//! The input layer samples devices once per tick and hands the core one
//! immutable [`InputIntent`]; movement, jumping and interaction all read the
//! same snapshot.

use serde::{Deserialize, Serialize};

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveAxis {
    Left,
    #[default]
    Idle,
    Right,
}

impl MoveAxis {
    /// The axis as -1, 0 or 1.
    pub fn sign(&self) -> f32 {
        match self {
            MoveAxis::Left => -1.0,
            MoveAxis::Idle => 0.0,
            MoveAxis::Right => 1.0,
        }
    }

    /// Combine two held directions; opposing keys cancel out.
    pub fn from_held(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => MoveAxis::Left,
            (false, true) => MoveAxis::Right,
            _ => MoveAxis::Idle,
        }
    }
}

/// Everything the core needs to know about player input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputIntent {
    pub move_axis: MoveAxis,
    pub jump_pressed: bool,
    pub interact_pressed: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    /// A 1-based numeric shortcut key, if one was pressed.
    pub numeric_choice: Option<u8>,
    pub confirm_pressed: bool,
    pub cancel_pressed: bool,
}

impl InputIntent {
    /// A snapshot with nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_move(mut self, axis: MoveAxis) -> Self {
        self.move_axis = axis;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    pub fn with_interact(mut self) -> Self {
        self.interact_pressed = true;
        self
    }

    pub fn with_menu_up(mut self) -> Self {
        self.menu_up = true;
        self
    }

    pub fn with_menu_down(mut self) -> Self {
        self.menu_down = true;
        self
    }

    /// Press a numeric shortcut. Keys outside 1-9 are dropped here.
    pub fn with_numeric(mut self, key: u8) -> Self {
        self.numeric_choice = (1..=9).contains(&key).then_some(key);
        self
    }

    pub fn with_confirm(mut self) -> Self {
        self.confirm_pressed = true;
        self
    }

    pub fn with_cancel(mut self) -> Self {
        self.cancel_pressed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_sign() {
        assert_eq!(MoveAxis::Left.sign(), -1.0);
        assert_eq!(MoveAxis::Idle.sign(), 0.0);
        assert_eq!(MoveAxis::Right.sign(), 1.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        assert_eq!(MoveAxis::from_held(true, true), MoveAxis::Idle);
        assert_eq!(MoveAxis::from_held(true, false), MoveAxis::Left);
        assert_eq!(MoveAxis::from_held(false, true), MoveAxis::Right);
        assert_eq!(MoveAxis::from_held(false, false), MoveAxis::Idle);
    }

    #[test]
    fn test_numeric_key_range() {
        assert_eq!(InputIntent::idle().with_numeric(3).numeric_choice, Some(3));
        assert_eq!(InputIntent::idle().with_numeric(0).numeric_choice, None);
        assert_eq!(InputIntent::idle().with_numeric(10).numeric_choice, None);
    }
}
