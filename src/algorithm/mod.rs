//! Grid algorithms over coordinates and obstacle sets

/// Bounded multi-source breadth-first flood-fill
pub mod flood;
/// Parametric line rasterization and line-of-sight
pub mod line;
