// Horizontal facing direction

/// Which way an entity faces or travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Sign applied to horizontal displacement (-1 for left, 1 for right)
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Whether a sprite facing this way should be mirrored
    pub fn is_flipped(&self) -> bool {
        matches!(self, Self::Left)
    }
}
