use crate::constants::{TEMP_WINDOW_SPAN, TEMP_WINDOW_TOP};

/// Rounds to the nearest integer with ties going towards positive infinity
/// (`-2.5` becomes `-2`, `2.5` becomes `3`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    // adding 0.0 folds -0.0 into 0.0
    (value * scale).round() / scale + 0.0
}

/// Relative temperature at a vertical position in percent:
/// 1 at `y = 30`, 0 at `y = 70`, extrapolated linearly outside that window.
pub fn temperature_at(y: f64) -> f64 {
    let normalized_y = (y - TEMP_WINDOW_TOP) / TEMP_WINDOW_SPAN;
    1.0 - normalized_y
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
