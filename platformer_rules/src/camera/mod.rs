//! Camera clamping: a view offset that follows the player but never scrolls
//! past the authored level.

use crate::config::CameraConfig;
use crate::geometry::{Rect, Vec2};

/// Derives the camera offset from the player's rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraClamp {
    config: CameraConfig,
}

impl CameraClamp {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// Center the viewport on the player, then clamp each axis independently
    /// into the level's scroll range.
    pub fn offset(&self, player: Rect) -> Vec2 {
        let center = player.center();
        let x = center.x - self.config.viewport_width / 2.0;
        let y = center.y - self.config.viewport_height / 2.0;

        Vec2::new(
            x.clamp(self.config.min_x, self.config.max_x),
            y.clamp(self.config.min_y, self.config.max_y),
        )
    }
}

impl Default for CameraClamp {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_centered_at(x: f32, y: f32) -> Rect {
        Rect::new(x - 18.0, y - 30.0, 36.0, 60.0)
    }

    #[test]
    fn test_follows_player_inside_bounds() {
        let camera = CameraClamp::default();
        let offset = camera.offset(player_centered_at(1000.0, 300.0));
        assert_eq!(offset, Vec2::new(520.0, 30.0));
    }

    #[test]
    fn test_clamps_each_axis_independently() {
        let camera = CameraClamp::default();

        let far_left = camera.offset(player_centered_at(-5000.0, 300.0));
        assert_eq!(far_left, Vec2::new(-300.0, 30.0));

        let far_right_and_low = camera.offset(player_centered_at(9000.0, 2000.0));
        assert_eq!(far_right_and_low, Vec2::new(2000.0, 40.0));

        let high = camera.offset(player_centered_at(1000.0, -900.0));
        assert_eq!(high, Vec2::new(520.0, -100.0));
    }

    #[test]
    fn test_custom_bounds() {
        let camera = CameraClamp::new(CameraConfig {
            viewport_width: 100.0,
            viewport_height: 100.0,
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 500.0,
        });

        let offset = camera.offset(player_centered_at(400.0, 300.0));
        assert_eq!(offset, Vec2::new(0.0, 250.0));
    }
}
