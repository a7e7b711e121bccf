//! Defaults and fixed settings for the command-line front end

// Query defaults
/// Hop limit used by `flood` when `--max-distance` is omitted
pub const DEFAULT_MAX_DISTANCE: usize = 8;

// Scatter settings
/// Fixed seed for reproducible obstacle scattering
pub const DEFAULT_SEED: u64 = 42;
/// Half-width of the square that scattered obstacles are drawn from
pub const DEFAULT_SCATTER_RADIUS: i32 = 16;

// Obstacle map glyphs
/// Character marking a blocked cell in an obstacle map
pub const OBSTACLE_GLYPH: char = '#';
/// Character marking an open cell in an obstacle map (spaces are also open)
pub const OPEN_GLYPH: char = '.';

// Logging
/// Filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
