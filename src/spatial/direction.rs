//! Compass directions on the integer grid
//!
//! `Undefined` is a first-class variant rather than an `Option`: it is what
//! classifying a coordinate against itself produces, and it maps to the zero
//! vector so that stepping in it is a no-op.

use std::fmt;

use crate::spatial::coordinate::Coordinate;

/// One of the eight grid headings, plus the `Undefined` sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No heading
    #[default]
    Undefined,
    /// `(0, 1)`
    PositiveY,
    /// `(1, 0)`
    PositiveX,
    /// `(0, -1)`
    NegativeY,
    /// `(-1, 0)`
    NegativeX,
    /// `(1, 1)`
    PosXPosY,
    /// `(1, -1)`
    PosXNegY,
    /// `(-1, -1)`
    NegXNegY,
    /// `(-1, 1)`
    NegXPosY,
}

impl Direction {
    /// The four orthogonal headings in neighbour expansion order
    pub const ORTHOGONAL: [Self; 4] = [
        Self::PositiveY,
        Self::PositiveX,
        Self::NegativeY,
        Self::NegativeX,
    ];

    /// The four diagonal headings
    pub const DIAGONAL: [Self; 4] = [
        Self::PosXPosY,
        Self::PosXNegY,
        Self::NegXNegY,
        Self::NegXPosY,
    ];

    /// Every heading except `Undefined`, orthogonal first
    pub const ALL: [Self; 8] = [
        Self::PositiveY,
        Self::PositiveX,
        Self::NegativeY,
        Self::NegativeX,
        Self::PosXPosY,
        Self::PosXNegY,
        Self::NegXNegY,
        Self::NegXPosY,
    ];

    /// Unit displacement for this heading; `Undefined` yields [`Coordinate::ZERO`]
    pub const fn vector(self) -> Coordinate {
        match self {
            Self::Undefined => Coordinate::ZERO,
            Self::PositiveY => Coordinate::new(0, 1),
            Self::PositiveX => Coordinate::new(1, 0),
            Self::NegativeY => Coordinate::new(0, -1),
            Self::NegativeX => Coordinate::new(-1, 0),
            Self::PosXPosY => Coordinate::new(1, 1),
            Self::PosXNegY => Coordinate::new(1, -1),
            Self::NegXNegY => Coordinate::new(-1, -1),
            Self::NegXPosY => Coordinate::new(-1, 1),
        }
    }

    /// Reduce a diagonal to one of its two orthogonal components
    ///
    /// `prefer_x` keeps the x component, otherwise the y component is kept.
    /// Orthogonal headings and `Undefined` are returned unchanged.
    pub const fn simplify(self, prefer_x: bool) -> Self {
        match (self, prefer_x) {
            (Self::PosXPosY | Self::PosXNegY, true) => Self::PositiveX,
            (Self::NegXNegY | Self::NegXPosY, true) => Self::NegativeX,
            (Self::PosXPosY | Self::NegXPosY, false) => Self::PositiveY,
            (Self::PosXNegY | Self::NegXNegY, false) => Self::NegativeY,
            (other, _) => other,
        }
    }

    /// The heading pointing the other way; `Undefined` stays `Undefined`
    pub const fn opposite(self) -> Self {
        match self {
            Self::Undefined => Self::Undefined,
            Self::PositiveY => Self::NegativeY,
            Self::PositiveX => Self::NegativeX,
            Self::NegativeY => Self::PositiveY,
            Self::NegativeX => Self::PositiveX,
            Self::PosXPosY => Self::NegXNegY,
            Self::PosXNegY => Self::NegXPosY,
            Self::NegXNegY => Self::PosXPosY,
            Self::NegXPosY => Self::PosXNegY,
        }
    }

    /// Whether this is one of the four axis-aligned headings
    pub const fn is_orthogonal(self) -> bool {
        matches!(
            self,
            Self::PositiveY | Self::PositiveX | Self::NegativeY | Self::NegativeX
        )
    }

    /// Whether this is one of the four diagonal headings
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::PosXPosY | Self::PosXNegY | Self::NegXNegY | Self::NegXPosY
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::PositiveY => "+y",
            Self::PositiveX => "+x",
            Self::NegativeY => "-y",
            Self::NegativeX => "-x",
            Self::PosXPosY => "+x+y",
            Self::PosXNegY => "+x-y",
            Self::NegXNegY => "-x-y",
            Self::NegXPosY => "-x+y",
        };
        f.write_str(name)
    }
}
