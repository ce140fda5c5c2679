// Player state machine
//
// Walking, jumping and shooting are orthogonal modes that can be active at
// the same time, subject to entry rules:
// - walking cannot start while jumping or already walking
// - jumping can start at any time except mid-jump
// - shooting neither blocks nor is blocked by the other modes
//
// Invalid transitions are silent no-ops; every `start_*` returns whether it
// took effect.

use crate::core::Direction;

/// Snapshot of the player's state as individual flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerFlags {
    pub idle: bool,
    pub walk_left: bool,
    pub walk_right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Tracks the active movement modes and facing direction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerState {
    /// Side being walked toward; at most one side can be active
    walking: Option<Direction>,
    jumping: bool,
    shooting: bool,
    /// Last walk direction, kept after walking stops
    direction: Direction,
}

impl PlayerState {
    /// Standing still, facing right
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin walking toward `direction`
    pub fn start_walk(&mut self, direction: Direction) -> bool {
        if self.jumping || self.walking.is_some() {
            return false;
        }
        self.direction = direction;
        self.walking = Some(direction);
        true
    }

    /// Stop walking toward `direction`; walking the other way is unaffected
    pub fn stop_walk(&mut self, direction: Direction) -> bool {
        if self.walking == Some(direction) {
            self.walking = None;
            true
        } else {
            false
        }
    }

    pub fn start_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        true
    }

    pub fn stop_jump(&mut self) {
        self.jumping = false;
    }

    pub fn start_shoot(&mut self) -> bool {
        if self.shooting {
            return false;
        }
        self.shooting = true;
        true
    }

    pub fn stop_shoot(&mut self) {
        self.shooting = false;
    }

    /// No movement mode is active
    pub fn is_idle(&self) -> bool {
        self.walking.is_none() && !self.jumping && !self.shooting
    }

    pub fn is_walking(&self) -> bool {
        self.walking.is_some()
    }

    pub fn is_walking_left(&self) -> bool {
        self.walking == Some(Direction::Left)
    }

    pub fn is_walking_right(&self) -> bool {
        self.walking == Some(Direction::Right)
    }

    /// Side currently being walked toward
    pub fn walking(&self) -> Option<Direction> {
        self.walking
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_shooting(&self) -> bool {
        self.shooting
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn flags(&self) -> PlayerFlags {
        PlayerFlags {
            idle: self.is_idle(),
            walk_left: self.is_walking_left(),
            walk_right: self.is_walking_right(),
            jump: self.jumping,
            shoot: self.shooting,
        }
    }
}
