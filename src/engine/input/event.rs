// Keyboard events as seen by the game

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, ModifiersState};

/// Whether a key went down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
}

/// A logical key press or release with the modifier state that matters to us
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub kind: KeyEventKind,
    pub key: Key,
    /// Control was held when the event fired (key-down only)
    pub ctrl: bool,
}

impl KeyboardEvent {
    pub fn key_down(key: Key, ctrl: bool) -> Self {
        Self {
            kind: KeyEventKind::KeyDown,
            key,
            ctrl,
        }
    }

    pub fn key_up(key: Key) -> Self {
        Self {
            kind: KeyEventKind::KeyUp,
            key,
            ctrl: false,
        }
    }

    /// Convert a winit key event using the current modifier state
    pub fn from_winit(event: &KeyEvent, modifiers: ModifiersState) -> Self {
        match event.state {
            ElementState::Pressed => {
                Self::key_down(event.logical_key.clone(), modifiers.control_key())
            }
            ElementState::Released => Self::key_up(event.logical_key.clone()),
        }
    }
}
