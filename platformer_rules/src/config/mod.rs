//! Tuning values for the world simulation, loadable from TOML.
//!
//! Every field has a serde default equal to the authored campus values, so a
//! config file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Vec2;

/// Errors raised while loading or validating a [`RulesConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse rules config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Player movement tuning. Rates are per second; each tick scales them by the
/// measured elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    #[serde(default = "default_body_width")]
    pub width: f32,
    #[serde(default = "default_body_height")]
    pub height: f32,
    #[serde(default = "default_spawn")]
    pub spawn: Vec2,
    /// Horizontal speed while a direction is held.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Upward velocity applied on jump.
    #[serde(default = "default_jump_force")]
    pub jump_force: f32,
    /// Downward acceleration.
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Maximum downward velocity.
    #[serde(default = "default_terminal_velocity")]
    pub terminal_velocity: f32,
}

fn default_body_width() -> f32 {
    36.0
}

fn default_body_height() -> f32 {
    60.0
}

fn default_spawn() -> Vec2 {
    Vec2::new(100.0, 340.0)
}

fn default_speed() -> f32 {
    252.0
}

fn default_jump_force() -> f32 {
    660.0
}

fn default_gravity() -> f32 {
    2160.0
}

fn default_terminal_velocity() -> f32 {
    720.0
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            width: default_body_width(),
            height: default_body_height(),
            spawn: default_spawn(),
            speed: default_speed(),
            jump_force: default_jump_force(),
            gravity: default_gravity(),
            terminal_velocity: default_terminal_velocity(),
        }
    }
}

/// Camera viewport and the scroll range of the authored level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    #[serde(default = "default_min_x")]
    pub min_x: f32,
    #[serde(default = "default_max_x")]
    pub max_x: f32,
    #[serde(default = "default_min_y")]
    pub min_y: f32,
    #[serde(default = "default_max_y")]
    pub max_y: f32,
}

fn default_viewport_width() -> f32 {
    960.0
}

fn default_viewport_height() -> f32 {
    540.0
}

fn default_min_x() -> f32 {
    -300.0
}

fn default_max_x() -> f32 {
    2000.0
}

fn default_min_y() -> f32 {
    -100.0
}

fn default_max_y() -> f32 {
    40.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            min_x: default_min_x(),
            max_x: default_max_x(),
            min_y: default_min_y(),
            max_y: default_max_y(),
        }
    }
}

/// NPC proximity trigger settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Distance added to every side of an NPC's bounds for the proximity test.
    #[serde(default = "default_margin")]
    pub margin: f32,
    /// Seconds before another conversation may be opened.
    #[serde(default = "default_cooldown")]
    pub cooldown: f32,
}

fn default_margin() -> f32 {
    10.0
}

fn default_cooldown() -> f32 {
    0.5
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            cooldown: default_cooldown(),
        }
    }
}

/// All world tuning in one place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl RulesConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let movement = &self.movement;
        if movement.width <= 0.0 || movement.height <= 0.0 {
            return Err(ConfigError::invalid(
                "movement.size",
                format!("{}x{} must be positive", movement.width, movement.height),
            ));
        }
        if movement.speed < 0.0 || movement.jump_force < 0.0 || movement.gravity < 0.0 {
            return Err(ConfigError::invalid(
                "movement",
                "speed, jump_force and gravity must not be negative",
            ));
        }
        if movement.terminal_velocity <= 0.0 {
            return Err(ConfigError::invalid(
                "movement.terminal_velocity",
                format!("{} must be positive", movement.terminal_velocity),
            ));
        }

        let camera = &self.camera;
        if camera.min_x > camera.max_x || camera.min_y > camera.max_y {
            return Err(ConfigError::invalid(
                "camera",
                "minimum bounds must not exceed maximum bounds",
            ));
        }

        let interaction = &self.interaction;
        if interaction.margin < 0.0 || interaction.cooldown < 0.0 {
            return Err(ConfigError::invalid(
                "interaction",
                "margin and cooldown must not be negative",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RulesConfig::from_toml_str(
            r#"
            [movement]
            speed = 300.0

            [interaction]
            cooldown = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.movement.speed, 300.0);
        assert_eq!(config.movement.jump_force, 660.0);
        assert_eq!(config.interaction.cooldown, 1.0);
        assert_eq!(config.interaction.margin, 10.0);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn test_inverted_camera_bounds_rejected() {
        let result = RulesConfig::from_toml_str(
            r#"
            [camera]
            min_x = 100.0
            max_x = 0.0
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "camera", .. })
        ));
    }

    #[test]
    fn test_zero_terminal_velocity_rejected() {
        let result = RulesConfig::from_toml_str("[movement]\nterminal_velocity = 0.0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let result = RulesConfig::from_toml_str("[movement\nspeed = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
