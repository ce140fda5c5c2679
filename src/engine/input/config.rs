// Key binding table

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::Key;

/// Maps logical keys to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<Key, Action>,
}

impl InputConfig {
    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(Key, Action)>) -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing any previous binding for that key
    pub fn bind(&mut self, key: Key, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: &Key) -> Option<Action> {
        self.bindings.get(key).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::super::action::{char_key, named_key};
    use super::*;
    use winit::keyboard::NamedKey;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(config.get_action(&char_key("a")), Some(Action::MoveLeft));
        assert_eq!(
            config.get_action(&named_key(NamedKey::ArrowRight)),
            Some(Action::MoveRight)
        );
        assert_eq!(config.get_action(&named_key(NamedKey::Space)), Some(Action::Jump));
        assert_eq!(config.get_action(&char_key("j")), Some(Action::Shoot));
        assert_eq!(config.get_action(&char_key("w")), None);
    }

    #[test]
    fn test_later_binding_wins() {
        let config = InputConfig::from_bindings(vec![
            (char_key("a"), Action::MoveLeft),
            (char_key("a"), Action::Shoot),
        ]);
        assert_eq!(config.get_action(&char_key("a")), Some(Action::Shoot));
    }
}
