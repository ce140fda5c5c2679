// Rendering surface abstraction
//
// Game entities draw through the `Canvas` trait; `SpriteBatch` records the
// calls so a backend (or a test) can consume them in order.

mod canvas;

pub use canvas::{Canvas, DrawCommand, SpriteBatch};
