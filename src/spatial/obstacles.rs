//! Read-only obstacle membership
//!
//! Algorithms only ever ask whether a cell is blocked, so any collection of
//! coordinates can serve as an obstacle set. Hashed and ordered sets answer in
//! constant or logarithmic time; slices fall back to a linear scan.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use crate::spatial::coordinate::Coordinate;

/// A set of blocked cells queried during flood-fill and line-of-sight checks
pub trait Obstacles {
    /// Whether `coordinate` is blocked
    fn is_blocked(&self, coordinate: Coordinate) -> bool;
}

impl<S: BuildHasher> Obstacles for HashSet<Coordinate, S> {
    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.contains(&coordinate)
    }
}

impl Obstacles for BTreeSet<Coordinate> {
    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.contains(&coordinate)
    }
}

impl Obstacles for [Coordinate] {
    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.contains(&coordinate)
    }
}

impl Obstacles for Vec<Coordinate> {
    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.as_slice().is_blocked(coordinate)
    }
}

impl<const N: usize> Obstacles for [Coordinate; N] {
    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.as_slice().is_blocked(coordinate)
    }
}
