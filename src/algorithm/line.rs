//! Straight-line rasterization by uniform parametric stepping
//!
//! A line spanning `n` cells along its dominant axis is sampled at `t = i / n`
//! for `i` in `0..=n`, and each sample is rounded onto the grid independently
//! with [`Coordinate::lerp`]. The dominant axis advances exactly one cell per
//! sample, so the result is always `n + 1` points long and starts and ends on
//! the endpoints. This is not Bresenham: minor-axis steps follow the
//! ties-to-even rounding of the interpolation.

use crate::math::rounding::step_fraction;
use crate::spatial::coordinate::Coordinate;
use crate::spatial::obstacles::Obstacles;

/// Cells crossed by the straight line from `start` to `end`, both inclusive
///
/// The result has `start.diagonal_distance(end) + 1` points; tracing a point
/// to itself yields `[start]`.
pub fn trace_line(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    line_points(start, end).collect()
}

/// Whether no cell on the line from `start` to `end`, endpoints included, is blocked
pub fn is_line_unbroken<O>(start: Coordinate, end: Coordinate, obstacles: &O) -> bool
where
    O: Obstacles + ?Sized,
{
    !line_points(start, end).any(|cell| obstacles.is_blocked(cell))
}

fn line_points(start: Coordinate, end: Coordinate) -> impl Iterator<Item = Coordinate> {
    let steps = start.diagonal_distance(end);
    (0..=steps).map(move |step| Coordinate::lerp(start, end, step_fraction(step, steps)))
}
