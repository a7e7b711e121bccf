//! Spatial value types
//!
//! This module contains the grid primitives the algorithms operate on:
//! - Integer coordinates and their arithmetic
//! - Compass directions and their displacement vectors
//! - Obstacle membership queries

/// Integer grid coordinate value type
pub mod coordinate;
/// Orthogonal and diagonal compass directions
pub mod direction;
/// Read-only obstacle membership
pub mod obstacles;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use obstacles::Obstacles;
