//! Mathematical utilities for grid arithmetic

/// Float to grid rounding used by scaling and interpolation
pub mod rounding;
