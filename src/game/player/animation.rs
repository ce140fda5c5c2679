// Animation selection for the player

use log::debug;

use super::state::PlayerState;
use crate::engine::animation::{Animation, AnimationDef, AnimationError};

/// The four player animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Idle,
    Walk,
    Jump,
    Shoot,
}

pub const IDLE_ANIMATION: AnimationDef = AnimationDef::still("idle", &[0]);
pub const WALK_ANIMATION: AnimationDef = AnimationDef::looping("walk", &[1, 2], 12);
pub const JUMP_ANIMATION: AnimationDef = AnimationDef::still("jump", &[3]);
pub const SHOOT_ANIMATION: AnimationDef = AnimationDef::looping("shoot", &[4, 5], 10);

impl AnimationKind {
    pub const ALL: [AnimationKind; 4] = [Self::Idle, Self::Walk, Self::Jump, Self::Shoot];

    pub fn def(&self) -> AnimationDef {
        match self {
            Self::Idle => IDLE_ANIMATION,
            Self::Walk => WALK_ANIMATION,
            Self::Jump => JUMP_ANIMATION,
            Self::Shoot => SHOOT_ANIMATION,
        }
    }

    /// Pick the animation for a state: shoot > jump > walk > idle
    pub fn select(state: &PlayerState) -> Self {
        if state.is_shooting() {
            Self::Shoot
        } else if state.is_jumping() {
            Self::Jump
        } else if state.is_walking() {
            Self::Walk
        } else {
            Self::Idle
        }
    }
}

/// The player's animation set with exactly one current animation
#[derive(Debug, Clone)]
pub struct PlayerAnimations {
    idle: Animation,
    walk: Animation,
    jump: Animation,
    shoot: Animation,
    current: AnimationKind,
}

impl PlayerAnimations {
    /// Build all animations with idle playing
    pub fn new() -> Result<Self, AnimationError> {
        let mut animations = Self {
            idle: Animation::new(IDLE_ANIMATION)?,
            walk: Animation::new(WALK_ANIMATION)?,
            jump: Animation::new(JUMP_ANIMATION)?,
            shoot: Animation::new(SHOOT_ANIMATION)?,
            current: AnimationKind::Idle,
        };
        animations.idle.play();
        Ok(animations)
    }

    pub fn get(&self, kind: AnimationKind) -> &Animation {
        match kind {
            AnimationKind::Idle => &self.idle,
            AnimationKind::Walk => &self.walk,
            AnimationKind::Jump => &self.jump,
            AnimationKind::Shoot => &self.shoot,
        }
    }

    fn get_mut(&mut self, kind: AnimationKind) -> &mut Animation {
        match kind {
            AnimationKind::Idle => &mut self.idle,
            AnimationKind::Walk => &mut self.walk,
            AnimationKind::Jump => &mut self.jump,
            AnimationKind::Shoot => &mut self.shoot,
        }
    }

    pub fn current_kind(&self) -> AnimationKind {
        self.current
    }

    pub fn current(&self) -> &Animation {
        self.get(self.current)
    }

    /// Switch to the animation matching `state` if it differs from the current one
    ///
    /// Returns true when a switch happened. An unchanged selection leaves the
    /// running animation untouched.
    pub fn reconcile(&mut self, state: &PlayerState) -> bool {
        let next = AnimationKind::select(state);
        if next == self.current {
            return false;
        }
        self.force(next);
        true
    }

    /// Stop the current animation and play `kind` from its first frame
    pub fn force(&mut self, kind: AnimationKind) {
        debug!("Animation {} -> {}", self.current().id(), self.get(kind).id());
        self.get_mut(self.current).stop();
        self.current = kind;
        self.get_mut(kind).play();
    }

    /// Advance the current animation by one tick
    pub fn advance(&mut self) {
        self.get_mut(self.current).advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::engine::animation::FrameDuration;

    #[test]
    fn test_animation_table() {
        assert_eq!(IDLE_ANIMATION.frames.len(), 1);
        assert_eq!(IDLE_ANIMATION.duration, FrameDuration::Infinite);
        assert_eq!(WALK_ANIMATION.frames.len(), 2);
        assert_eq!(WALK_ANIMATION.duration, FrameDuration::Ticks(12));
        assert!(WALK_ANIMATION.looping);
        assert_eq!(JUMP_ANIMATION.duration, FrameDuration::Infinite);
        assert_eq!(SHOOT_ANIMATION.frames.len(), 2);
        assert_eq!(SHOOT_ANIMATION.duration, FrameDuration::Ticks(10));
        assert!(SHOOT_ANIMATION.looping);

        for kind in AnimationKind::ALL {
            assert!(Animation::new(kind.def()).is_ok());
        }
    }

    #[test]
    fn test_select_priority() {
        let mut state = PlayerState::new();
        assert_eq!(AnimationKind::select(&state), AnimationKind::Idle);

        state.start_walk(Direction::Left);
        assert_eq!(AnimationKind::select(&state), AnimationKind::Walk);

        state.start_jump();
        assert_eq!(AnimationKind::select(&state), AnimationKind::Jump);

        state.start_shoot();
        assert_eq!(AnimationKind::select(&state), AnimationKind::Shoot);
    }

    #[test]
    fn test_starts_on_idle() {
        let animations = PlayerAnimations::new().unwrap();
        assert_eq!(animations.current_kind(), AnimationKind::Idle);
        assert!(animations.current().is_playing());
        assert!(!animations.get(AnimationKind::Walk).is_playing());
    }

    #[test]
    fn test_reconcile_switches_on_change() {
        let mut animations = PlayerAnimations::new().unwrap();
        let mut state = PlayerState::new();
        state.start_walk(Direction::Right);

        assert!(animations.reconcile(&state));
        assert_eq!(animations.current_kind(), AnimationKind::Walk);
        assert!(animations.get(AnimationKind::Walk).is_playing());
        assert!(!animations.get(AnimationKind::Idle).is_playing());
    }

    #[test]
    fn test_reconcile_does_not_restart() {
        let mut animations = PlayerAnimations::new().unwrap();
        let mut state = PlayerState::new();
        state.start_walk(Direction::Right);
        animations.reconcile(&state);

        for _ in 0..6 {
            assert!(!animations.reconcile(&state));
            animations.advance();
        }
        assert_eq!(animations.current().frame_index(), 1);
    }

    #[test]
    fn test_force_restarts_same_animation() {
        let mut animations = PlayerAnimations::new().unwrap();
        animations.force(AnimationKind::Shoot);
        for _ in 0..5 {
            animations.advance();
        }
        assert_eq!(animations.current().frame_index(), 1);

        animations.force(AnimationKind::Shoot);
        assert_eq!(animations.current().frame_index(), 0);
    }
}
