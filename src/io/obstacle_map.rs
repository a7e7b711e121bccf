//! Text obstacle maps
//!
//! Each line of the file is one row: line `k` is `y = origin.y + k` and the
//! character at column `j` is `x = origin.x + j`. [`OBSTACLE_GLYPH`] blocks a
//! cell; [`OPEN_GLYPH`] and spaces leave it open. Anything else is rejected.

use std::collections::HashSet;
use std::path::Path;

use crate::io::configuration::{OBSTACLE_GLYPH, OPEN_GLYPH};
use crate::io::error::{GridError, Result};
use crate::spatial::coordinate::Coordinate;
use crate::spatial::obstacles::Obstacles;

/// Blocked cells read from a text map
#[derive(Debug, Clone, Default)]
pub struct ObstacleMap {
    /// Every blocked cell, in world coordinates
    pub obstacles: HashSet<Coordinate>,
    /// Longest row length in characters
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl ObstacleMap {
    /// Load a map file, placing its first character at `origin`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - A row contains a character other than an obstacle or open glyph
    pub fn from_path(path: &Path, origin: Coordinate) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GridError::FileSystem {
            path: path.to_path_buf(),
            operation: "read obstacle map",
            source: e,
        })?;

        Self::parse(&text, origin, path)
    }

    /// Parse map text, placing its first character at `origin`
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a row contains a character other than an obstacle or open glyph
    pub fn parse(text: &str, origin: Coordinate, path: &Path) -> Result<Self> {
        let mut map = Self::default();

        for (row, line) in text.lines().enumerate() {
            let mut row_width = 0;
            for (column, glyph) in line.chars().enumerate() {
                row_width = column + 1;
                match glyph {
                    OBSTACLE_GLYPH => {
                        map.obstacles.insert(Coordinate::new(
                            origin.x + column as i32,
                            origin.y + row as i32,
                        ));
                    }
                    OPEN_GLYPH | ' ' => {}
                    other => {
                        return Err(GridError::InvalidObstacleMap {
                            path: path.to_path_buf(),
                            line: row + 1,
                            reason: format!(
                                "unexpected character '{other}' at column {}",
                                column + 1
                            ),
                        });
                    }
                }
            }
            map.width = map.width.max(row_width);
            map.height = row + 1;
        }

        Ok(map)
    }

    /// Number of blocked cells
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the map has no blocked cells
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl Obstacles for ObstacleMap {
    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.obstacles.contains(&coordinate)
    }
}
