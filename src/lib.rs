// Player controller for a 2D side-scrolling shooter
//
// - `core`: shared types (direction, math helpers)
// - `engine`: animation playback, tick clock, input routing, draw surface
// - `game`: the player entity and its bullets

pub mod core;
pub mod engine;
pub mod game;
