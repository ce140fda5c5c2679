// Player tuning values
//
// Every player uses the same values; they are plain data validated once
// when the player is constructed.

use glam::Vec2;

use super::PlayerError;
use crate::game::bullet::{BulletConfig, BASE_BULLET};

/// Movement, jump and shooting parameters for a player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    // Movement
    /// Walk speed in tenths of a pixel per tick (truncated to whole pixels)
    pub walk_speed: f32,
    /// Upward velocity at the start of a jump
    pub jump_force: f32,
    /// Added to the gravity accumulator every jumping tick
    pub gravity_step: f32,

    // World
    /// Lowest y the player can reach
    pub ground_level: f32,
    /// Where the player appears
    pub spawn_position: Vec2,

    // Shooting
    /// Bullet origin relative to the player position
    pub bullet_offset: Vec2,
    pub bullet: BulletConfig,
}

pub const BASE_CONFIG: PlayerConfig = PlayerConfig {
    walk_speed: 40.0,
    jump_force: 10.0,
    gravity_step: 0.5,

    ground_level: 300.0,
    spawn_position: Vec2::new(20.0, 300.0),

    bullet_offset: Vec2::new(10.0, 18.0),
    bullet: BASE_BULLET,
};

impl Default for PlayerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl PlayerConfig {
    /// Check that the values produce a controllable player
    pub fn validate(&self) -> Result<(), PlayerError> {
        let finite = [
            ("walk_speed", self.walk_speed),
            ("jump_force", self.jump_force),
            ("gravity_step", self.gravity_step),
            ("ground_level", self.ground_level),
            ("bullet.speed", self.bullet.speed),
            ("bullet.max_distance", self.bullet.max_distance),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PlayerError::InvalidConfig(format!("{} must be finite", name)));
            }
        }
        if !self.spawn_position.is_finite() || !self.bullet_offset.is_finite() {
            return Err(PlayerError::InvalidConfig(
                "positions must be finite".to_string(),
            ));
        }

        if self.walk_speed < 0.0 {
            return Err(PlayerError::InvalidConfig(
                "walk_speed must not be negative".to_string(),
            ));
        }
        if self.jump_force < 0.0 {
            return Err(PlayerError::InvalidConfig(
                "jump_force must not be negative".to_string(),
            ));
        }
        // Without gravity a jump never lands
        if self.gravity_step <= 0.0 {
            return Err(PlayerError::InvalidConfig(
                "gravity_step must be positive".to_string(),
            ));
        }
        if self.bullet.speed <= 0.0 || self.bullet.max_distance <= 0.0 {
            return Err(PlayerError::InvalidConfig(
                "bullet speed and range must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
