// Input handling system
//
// Keyboard events from the window are converted into `KeyboardEvent`s,
// looked up in an `InputConfig` and routed to the player as state
// transitions by the `InputRouter`.
//
// - `action`: game actions and default key bindings
// - `config`: key binding configuration and remapping
// - `event`: the keyboard event type and its winit conversion
// - `router`: dispatch from events to a `ControlTarget`

pub mod action;
pub mod config;
pub mod event;
pub mod router;

// Re-export commonly used types
pub use action::Action;
pub use config::InputConfig;
pub use event::{KeyEventKind, KeyboardEvent};
pub use router::{ControlTarget, InputRouter};
