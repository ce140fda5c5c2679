// Player entity

use glam::Vec2;
use log::{debug, info};

use super::animation::{AnimationKind, PlayerAnimations};
use super::config::PlayerConfig;
use super::physics::PhysicsIntegrator;
use super::state::PlayerState;
use super::PlayerError;
use crate::core::Direction;
use crate::engine::input::ControlTarget;
use crate::engine::renderer::Canvas;
use crate::game::bullet::BulletManager;

/// Sprite registry key for the player
pub const PLAYER_SPRITE: &str = "player";

/// The keyboard-controlled player character
#[derive(Debug)]
pub struct Player {
    config: PlayerConfig,
    position: Vec2,
    state: PlayerState,
    physics: PhysicsIntegrator,
    bullets: BulletManager,
    animations: PlayerAnimations,
}

impl Player {
    /// Create a player at the configured spawn position, facing right and idle
    pub fn new(config: PlayerConfig) -> Result<Self, PlayerError> {
        config.validate()?;

        let player = Self {
            position: config.spawn_position,
            state: PlayerState::new(),
            physics: PhysicsIntegrator::new(&config),
            bullets: BulletManager::new(config.bullet),
            animations: PlayerAnimations::new()?,
            config,
        };
        info!("Player spawned at {}", player.position);

        Ok(player)
    }

    pub fn start_walk(&mut self, direction: Direction) {
        if self.state.start_walk(direction) {
            debug!("Walking {:?}", direction);
        }
    }

    pub fn stop_walk(&mut self, direction: Direction) {
        if self.state.stop_walk(direction) {
            debug!("Stopped walking {:?}", direction);
        }
    }

    pub fn start_jump(&mut self) {
        if self.state.start_jump() {
            debug!("Jump from y={}", self.position.y);
        }
    }

    /// End the jump and clear accumulated gravity
    pub fn stop_jump(&mut self) {
        self.state.stop_jump();
        self.physics.reset_gravity();
    }

    /// Start shooting; fires one bullet per press
    pub fn start_shoot(&mut self) {
        if self.state.start_shoot() {
            let origin = self.position + self.config.bullet_offset;
            self.bullets.spawn(origin, self.state.direction());
        }
    }

    /// Stop shooting and drop straight back to the idle animation
    ///
    /// The idle animation is shown even if walking or jumping continues;
    /// the next update picks the animation for the remaining state.
    pub fn stop_shoot(&mut self) {
        self.state.stop_shoot();
        self.animations.force(AnimationKind::Idle);
    }

    /// Advance one tick
    pub fn update(&mut self) {
        if self.state.is_walking() {
            self.physics.walk(&mut self.position, self.state.direction());
        }
        if self.state.is_jumping() {
            self.physics.jump(&mut self.position);
        }

        self.bullets.update_all();

        // Landing must be resolved before the animation is picked
        if self.physics.land(&mut self.position) && self.state.is_jumping() {
            debug!("Landed at x={}", self.position.x);
            self.stop_jump();
        }

        self.animations.reconcile(&self.state);
        self.animations.advance();
    }

    /// Draw bullets, then the player on top of them
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        self.bullets.draw_all(canvas);
        canvas.draw_sprite(
            PLAYER_SPRITE,
            self.animations.current().frame(),
            self.position,
            self.state.direction().is_flipped(),
        );
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    /// Gravity accumulated during the current jump
    pub fn gravity(&self) -> f32 {
        self.physics.gravity()
    }

    pub fn bullets(&self) -> &BulletManager {
        &self.bullets
    }

    pub fn animations(&self) -> &PlayerAnimations {
        &self.animations
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}

impl ControlTarget for Player {
    fn start_walk(&mut self, direction: Direction) {
        Player::start_walk(self, direction);
    }

    fn clear_walk(&mut self, direction: Direction) {
        self.state.stop_walk(direction);
    }

    fn start_jump(&mut self) {
        Player::start_jump(self);
    }

    fn start_shoot(&mut self) {
        Player::start_shoot(self);
    }

    fn stop_shoot(&mut self) {
        Player::stop_shoot(self);
    }
}
