// Projectiles fired by the player

use glam::Vec2;
use log::debug;

use crate::core::Direction;
use crate::engine::renderer::Canvas;

/// Unique identifier for a bullet
pub type BulletId = u32;

/// Sprite registry key for bullets
pub const BULLET_SPRITE: &str = "bullet";

/// What a bullet reports after its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStatus {
    Alive,
    /// The bullet is done and should be removed by its owner
    Finished,
}

/// Bullet motion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletConfig {
    /// Horizontal pixels travelled per tick
    pub speed: f32,
    /// Distance after which the bullet is finished
    pub max_distance: f32,
}

pub const BASE_BULLET: BulletConfig = BulletConfig {
    speed: 8.0,
    max_distance: 480.0,
};

impl Default for BulletConfig {
    fn default() -> Self {
        BASE_BULLET
    }
}

/// A single projectile travelling horizontally
#[derive(Debug, Clone)]
pub struct Bullet {
    id: BulletId,
    position: Vec2,
    direction: Direction,
    config: BulletConfig,
    travelled: f32,
}

impl Bullet {
    pub fn new(id: BulletId, position: Vec2, direction: Direction, config: BulletConfig) -> Self {
        Self {
            id,
            position,
            direction,
            config,
            travelled: 0.0,
        }
    }

    /// Move one tick and report whether the bullet is done
    pub fn update(&mut self) -> BulletStatus {
        self.position.x += self.config.speed * self.direction.sign();
        self.travelled += self.config.speed;

        if self.travelled >= self.config.max_distance {
            BulletStatus::Finished
        } else {
            BulletStatus::Alive
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw_sprite(BULLET_SPRITE, 0, self.position, self.direction.is_flipped());
    }

    pub fn id(&self) -> BulletId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Owns the live bullets, in spawn order
#[derive(Debug, Default)]
pub struct BulletManager {
    bullets: Vec<Bullet>,
    next_id: BulletId,
    config: BulletConfig,
}

impl BulletManager {
    pub fn new(config: BulletConfig) -> Self {
        Self {
            bullets: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Spawn a bullet at `position` travelling in `direction`
    pub fn spawn(&mut self, position: Vec2, direction: Direction) -> BulletId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        self.bullets
            .push(Bullet::new(id, position, direction, self.config));
        debug!("Bullet {} fired {:?} from {}", id, direction, position);

        id
    }

    /// Update every bullet in spawn order, then drop the finished ones
    pub fn update_all(&mut self) {
        let finished: Vec<BulletId> = self
            .bullets
            .iter_mut()
            .filter_map(|bullet| (bullet.update() == BulletStatus::Finished).then_some(bullet.id()))
            .collect();

        for id in finished {
            self.remove(id);
        }
    }

    /// Draw every bullet in spawn order
    pub fn draw_all<C: Canvas>(&self, canvas: &mut C) {
        for bullet in &self.bullets {
            bullet.draw(canvas);
        }
    }

    /// Remove a bullet by ID
    pub fn remove(&mut self, id: BulletId) -> Option<Bullet> {
        let pos = self.bullets.iter().position(|b| b.id == id)?;
        debug!("Bullet {} removed", id);
        Some(self.bullets.remove(pos))
    }

    pub fn get(&self, id: BulletId) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.id == id)
    }

    /// All live bullets, oldest first
    pub fn all(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn count(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::SpriteBatch;

    const SHORT_RANGE: BulletConfig = BulletConfig {
        speed: 10.0,
        max_distance: 30.0,
    };

    #[test]
    fn test_bullet_moves_in_direction() {
        let mut right = Bullet::new(0, Vec2::new(100.0, 50.0), Direction::Right, SHORT_RANGE);
        let mut left = Bullet::new(1, Vec2::new(100.0, 50.0), Direction::Left, SHORT_RANGE);

        assert_eq!(right.update(), BulletStatus::Alive);
        assert_eq!(left.update(), BulletStatus::Alive);
        assert_eq!(right.position(), Vec2::new(110.0, 50.0));
        assert_eq!(left.position(), Vec2::new(90.0, 50.0));
    }

    #[test]
    fn test_bullet_finishes_at_max_distance() {
        let mut bullet = Bullet::new(0, Vec2::ZERO, Direction::Right, SHORT_RANGE);
        assert_eq!(bullet.update(), BulletStatus::Alive);
        assert_eq!(bullet.update(), BulletStatus::Alive);
        assert_eq!(bullet.update(), BulletStatus::Finished);
    }

    #[test]
    fn test_manager_spawn_assigns_ids_in_order() {
        let mut manager = BulletManager::new(SHORT_RANGE);
        let a = manager.spawn(Vec2::ZERO, Direction::Right);
        let b = manager.spawn(Vec2::ZERO, Direction::Left);

        assert_ne!(a, b);
        let ids: Vec<_> = manager.all().iter().map(Bullet::id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(manager.get(b).map(Bullet::direction), Some(Direction::Left));
    }

    #[test]
    fn test_manager_reaps_finished_bullets() {
        let mut manager = BulletManager::new(SHORT_RANGE);
        let first = manager.spawn(Vec2::ZERO, Direction::Right);

        manager.update_all();
        let second = manager.spawn(Vec2::ZERO, Direction::Right);
        manager.update_all();
        assert_eq!(manager.count(), 2);

        // First bullet has now travelled its full range
        manager.update_all();
        assert_eq!(manager.count(), 1);
        assert!(manager.get(first).is_none());
        assert!(manager.get(second).is_some());

        manager.update_all();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut manager = BulletManager::default();
        assert!(manager.remove(42).is_none());
    }

    #[test]
    fn test_draw_all_in_spawn_order() {
        let mut manager = BulletManager::new(SHORT_RANGE);
        manager.spawn(Vec2::new(1.0, 0.0), Direction::Right);
        manager.spawn(Vec2::new(2.0, 0.0), Direction::Left);

        let mut batch = SpriteBatch::new();
        manager.draw_all(&mut batch);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.commands()[0].position, Vec2::new(1.0, 0.0));
        assert!(batch.commands()[1].flip_horizontal);
        assert!(batch.commands().iter().all(|c| c.sprite == BULLET_SPRITE));
    }
}
