//! Immutable integer grid coordinates with component-wise arithmetic
//!
//! Coordinates are plain `Copy` values: equality, hashing and ordering are
//! structural, and every operation returns a new coordinate.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_traits::Zero;

use crate::io::error::GridError;
use crate::math::rounding::scale_component;
use crate::spatial::direction::Direction;

/// A cell on the unbounded integer grid
///
/// Ordering compares `x` first and then `y`, which gives sorted output a
/// stable column-major layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

impl Coordinate {
    /// The origin `(0, 0)`
    pub const ZERO: Self = Self::new(0, 0);

    /// The unit diagonal `(1, 1)`
    pub const ONE: Self = Self::new(1, 1);

    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Linear interpolation `a + (b - a) * t`, rounded onto the grid
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate past the
    /// endpoints. Only the scaled offset is rounded (ties to even); the start
    /// point is added back exactly.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        a + (b - a) * t
    }

    /// Chebyshev distance: the larger of the two absolute component deltas
    pub const fn diagonal_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy { dx } else { dy }
    }

    /// Manhattan distance: the sum of the two absolute component deltas
    ///
    /// Widened to `u64` since both deltas together can exceed `u32::MAX`.
    pub const fn cardinal_distance(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Classify the heading from `self` towards `other`
    ///
    /// Equal magnitudes on both axes give the matching diagonal. Otherwise the
    /// axis with the strictly larger magnitude wins and its own sign picks the
    /// positive or negative variant, whatever the other axis is doing.
    /// Comparing a coordinate with itself gives [`Direction::Undefined`].
    pub const fn direction_to(self, other: Self) -> Direction {
        let dx = other.x - self.x;
        let dy = other.y - self.y;

        if dx == 0 && dy == 0 {
            return Direction::Undefined;
        }

        let magnitude_x = dx.unsigned_abs();
        let magnitude_y = dy.unsigned_abs();

        if magnitude_x == magnitude_y {
            match (dx > 0, dy > 0) {
                (true, true) => Direction::PosXPosY,
                (true, false) => Direction::PosXNegY,
                (false, false) => Direction::NegXNegY,
                (false, true) => Direction::NegXPosY,
            }
        } else if magnitude_x > magnitude_y {
            if dx > 0 {
                Direction::PositiveX
            } else {
                Direction::NegativeX
            }
        } else if dy > 0 {
            Direction::PositiveY
        } else {
            Direction::NegativeY
        }
    }

    /// The cell one step away in `direction`
    ///
    /// [`Direction::Undefined`] has a zero vector and returns `self`.
    pub fn neighbor(self, direction: Direction) -> Self {
        self + direction.vector()
    }

    /// The four orthogonal neighbours, in [`Direction::ORTHOGONAL`] order
    ///
    /// Flood-fill expands cells in exactly this order.
    pub fn adjacents(self) -> [Self; 4] {
        Direction::ORTHOGONAL.map(|direction| self.neighbor(direction))
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Coordinate> for i32 {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Coordinate {
        rhs * self
    }
}

impl Mul<f64> for Coordinate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(scale_component(self.x, rhs), scale_component(self.y, rhs))
    }
}

impl Mul<Coordinate> for f64 {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Coordinate {
        rhs * self
    }
}

impl Zero for Coordinate {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.x, coordinate.y]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    /// Parse `x,y`, optionally wrapped in parentheses and padded with spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GridError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => trimmed
                .get(1..trimmed.len() - 1)
                .ok_or_else(|| invalid("unbalanced parentheses"))?,
            (None, None) => trimmed,
            _ => return Err(invalid("unbalanced parentheses")),
        };

        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| invalid("expected two components separated by ','"))?;

        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid(&format!("x component: {e}")))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid(&format!("y component: {e}")))?;

        Ok(Self::new(x, y))
    }
}
