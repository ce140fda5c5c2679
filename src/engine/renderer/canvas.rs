// Sprite draw recording

use glam::Vec2;

/// A 2D drawing surface
pub trait Canvas {
    /// Draw one frame of a named sprite at `position`
    fn draw_sprite(&mut self, sprite: &'static str, frame: usize, position: Vec2, flip_horizontal: bool);
}

/// A single recorded sprite draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Sprite registry key (e.g., "player", "bullet")
    pub sprite: &'static str,
    /// Frame index within the sprite sheet
    pub frame: usize,
    /// Top-left position in screen space
    pub position: Vec2,
    /// Whether the sprite is mirrored horizontally
    pub flip_horizontal: bool,
}

/// Collects draw calls in submission order (later commands are drawn on top)
#[derive(Debug, Default)]
pub struct SpriteBatch {
    commands: Vec<DrawCommand>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all recorded commands (called at the start of each frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for SpriteBatch {
    fn draw_sprite(&mut self, sprite: &'static str, frame: usize, position: Vec2, flip_horizontal: bool) {
        self.commands.push(DrawCommand {
            sprite,
            frame,
            position,
            flip_horizontal,
        });
    }
}
