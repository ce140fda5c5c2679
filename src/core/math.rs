// Math utilities and helper functions

/// Whole pixels moved per tick for a given walk speed
///
/// Walk speed is expressed in tenths of a pixel per tick and truncated,
/// so a speed of 40 moves 4 px and 45 also moves 4 px.
pub fn walk_step(walk_speed: f32) -> f32 {
    (walk_speed / 10.0).floor()
}

/// Clamp a value so it never exceeds `max`
pub fn clamp_max(value: f32, max: f32) -> f32 {
    if value > max {
        max
    } else {
        value
    }
}
