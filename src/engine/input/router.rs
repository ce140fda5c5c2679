// Routes keyboard events to a controllable entity

use super::action::Action;
use super::config::InputConfig;
use super::event::{KeyEventKind, KeyboardEvent};
use crate::core::Direction;
use log::{debug, trace};

/// Transitions the router can trigger on an entity
pub trait ControlTarget {
    fn start_walk(&mut self, direction: Direction);
    /// Clear the walk flag for one side only
    fn clear_walk(&mut self, direction: Direction);
    fn start_jump(&mut self);
    fn start_shoot(&mut self);
    fn stop_shoot(&mut self);
}

/// Translates key-down/key-up events into state transitions
#[derive(Debug, Clone)]
pub struct InputRouter {
    config: InputConfig,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputRouter {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Apply one event to `target`
    ///
    /// Returns the action that fired, or `None` when the event was ignored.
    pub fn route<T: ControlTarget>(&self, event: &KeyboardEvent, target: &mut T) -> Option<Action> {
        let Some(action) = self.config.get_action(&event.key) else {
            trace!("Ignoring unbound key {:?}", event.key);
            return None;
        };

        match event.kind {
            KeyEventKind::KeyDown => {
                if event.ctrl {
                    trace!("Ignoring {:?} with control held", event.key);
                    return None;
                }
                match action {
                    Action::MoveLeft => target.start_walk(Direction::Left),
                    Action::MoveRight => target.start_walk(Direction::Right),
                    Action::Jump => target.start_jump(),
                    Action::Shoot => target.start_shoot(),
                }
            }
            KeyEventKind::KeyUp => match action {
                Action::MoveLeft => target.clear_walk(Direction::Left),
                Action::MoveRight => target.clear_walk(Direction::Right),
                Action::Shoot => target.stop_shoot(),
                // Jumps end on landing, not on release
                Action::Jump => return None,
            },
        }

        debug!("{:?} {:?}", event.kind, action);
        Some(action)
    }
}
