// Core types shared by engine and game code

pub mod direction;
pub mod math;

pub use direction::Direction;
