// Player character
//
// This module contains everything related to the controllable player:
// - Tuning values and their validation
// - State machine for walk/jump/shoot modes
// - Per-tick movement integration
// - Animation selection
// - The player entity tying them together

pub mod animation;
pub mod config;
pub mod entity;
pub mod physics;
pub mod state;

use crate::engine::animation::AnimationError;

// Re-export commonly used types
pub use animation::{AnimationKind, PlayerAnimations};
pub use config::{PlayerConfig, BASE_CONFIG};
pub use entity::{Player, PLAYER_SPRITE};
pub use physics::PhysicsIntegrator;
pub use state::{PlayerFlags, PlayerState};

/// Player construction errors
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Invalid player config: {0}")]
    InvalidConfig(String),

    #[error("Invalid animation: {0}")]
    Animation(#[from] AnimationError),
}
