//! Error types for parsing and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for every fallible operation in the crate
#[derive(Debug)]
pub enum GridError {
    /// Text could not be parsed as a coordinate
    InvalidCoordinate {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A command-line or configuration parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An obstacle map file contained something other than obstacle or open glyphs
    InvalidObstacleMap {
        /// Path of the map file
        path: PathBuf,
        /// 1-based line number of the offending row
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Query results could not be written to the output sink
    Output {
        /// Underlying I/O error from the writer
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { input, reason } => {
                write!(f, "Invalid coordinate '{input}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidObstacleMap { path, line, reason } => {
                write!(
                    f,
                    "Invalid obstacle map '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { source } => {
                write!(f, "Failed to write query output: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
