// Engine modules: animation playback, tick clock, input, rendering surface

pub mod animation;
pub mod game_loop;
pub mod input;
pub mod renderer;
