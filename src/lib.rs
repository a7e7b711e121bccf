//! Integer grid geometry: a coordinate value type with direction classification,
//! bounded flood-fill reachability, line rasterization and line-of-sight queries
//!
//! Every algorithm is a pure function over `Copy` coordinates and read-only
//! obstacle sets, so results are reproducible and safe to compute from any thread.

#![forbid(unsafe_code)]

/// Flood-fill reachability and line tracing over the integer grid
pub mod algorithm;
/// Obstacle map loading, configuration defaults, errors and the command-line front end
pub mod io;
/// Rounding rules shared by scaling and interpolation
pub mod math;
/// Coordinate value type, compass directions and obstacle membership
pub mod spatial;

pub use algorithm::flood::{flood_fill, flood_fill_from};
pub use algorithm::line::{is_line_unbroken, trace_line};
pub use io::error::{GridError, Result};
pub use spatial::{Coordinate, Direction, Obstacles};
