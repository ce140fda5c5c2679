// Game action definitions and mappings

use winit::keyboard::{Key, NamedKey};

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Combat
    Shoot,
}

/// Create a key for a printable character
pub fn char_key(c: &str) -> Key {
    Key::Character(c.into())
}

/// Create a key for a named (non-printable) key
pub fn named_key(named: NamedKey) -> Key {
    Key::Named(named)
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(Key, Action)> {
    vec![
        // Movement (A/D plus arrows)
        (char_key("a"), Action::MoveLeft),
        (named_key(NamedKey::ArrowLeft), Action::MoveLeft),
        (char_key("d"), Action::MoveRight),
        (named_key(NamedKey::ArrowRight), Action::MoveRight),
        (named_key(NamedKey::Space), Action::Jump),
        // Combat
        (char_key("j"), Action::Shoot),
    ]
}
