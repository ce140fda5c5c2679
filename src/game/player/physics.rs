// Per-tick movement integration
//
// Discrete recurrence, not a physical integrator: identical inputs must
// produce identical trajectories.

use glam::Vec2;

use super::config::PlayerConfig;
use crate::core::math::{clamp_max, walk_step};
use crate::core::Direction;

/// Advances the player position for walking and jumping
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsIntegrator {
    walk_step: f32,
    jump_force: f32,
    gravity_step: f32,
    ground_level: f32,
    /// Downward pull accumulated during the current jump
    gravity: f32,
}

impl PhysicsIntegrator {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            walk_step: walk_step(config.walk_speed),
            jump_force: config.jump_force,
            gravity_step: config.gravity_step,
            ground_level: config.ground_level,
            gravity: 0.0,
        }
    }

    /// One tick of horizontal walking
    pub fn walk(&self, position: &mut Vec2, direction: Direction) {
        position.x += self.walk_step * direction.sign();
    }

    /// One tick of the jump arc
    pub fn jump(&mut self, position: &mut Vec2) {
        self.gravity += self.gravity_step;
        position.y -= self.jump_force - self.gravity;
    }

    /// Clamp to the ground, returns true when standing exactly on it
    pub fn land(&self, position: &mut Vec2) -> bool {
        position.y = clamp_max(position.y, self.ground_level);
        position.y == self.ground_level
    }

    pub fn reset_gravity(&mut self) {
        self.gravity = 0.0;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Horizontal pixels moved per walking tick
    pub fn walk_step(&self) -> f32 {
        self.walk_step
    }
}
