//! Input/output operations and error handling
//!
//! The geometry in [`crate::spatial`] and [`crate::algorithm`] never fails;
//! everything fallible lives here:
//! - Coordinate and argument parsing
//! - Obstacle map files
//! - The command-line front end

/// Command-line interface for running grid queries
pub mod cli;
/// Defaults and fixed settings for the command-line front end
pub mod configuration;
/// Error types for parsing and file operations
pub mod error;
/// Text obstacle map loading
pub mod obstacle_map;
/// Seeded random obstacle placement
pub mod scatter;
