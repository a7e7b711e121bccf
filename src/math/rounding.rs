//! Conversion of real-valued components back onto the integer grid
//!
//! A single rounding rule is shared by float scaling and interpolation so that
//! line tracing is reproducible: round to nearest, ties to the even integer.
//! Values outside the `i32` range saturate at the bounds, and NaN maps to zero.

/// Round a real component to the nearest grid index, ties to even
///
/// `0.5` rounds to `0`, `1.5` and `2.5` both round to `2`, `-0.5` rounds to `0`.
pub fn round_to_grid(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Scale an integer component by a real factor and round it back onto the grid
pub fn scale_component(component: i32, factor: f64) -> i32 {
    round_to_grid(f64::from(component) * factor)
}

/// Fraction `step / steps` used to parametrise evenly spaced samples
///
/// Returns `0.0` when `steps` is zero so degenerate spans collapse onto their start.
pub fn step_fraction(step: u32, steps: u32) -> f64 {
    if steps == 0 {
        0.0
    } else {
        f64::from(step) / f64::from(steps)
    }
}
