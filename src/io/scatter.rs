//! Seeded random obstacle placement for quick experiments

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::coordinate::Coordinate;

/// Draw `count` distinct obstacles uniformly from the square `[-radius, radius]²`
///
/// Cells in `keep_clear` are never chosen. The same seed always produces the
/// same set. If fewer than `count` cells are available, every available cell is
/// returned. A negative radius is treated as zero.
pub fn scatter_obstacles(
    count: usize,
    radius: i32,
    seed: u64,
    keep_clear: &HashSet<Coordinate>,
) -> HashSet<Coordinate> {
    let radius = radius.max(0);
    let side = u64::from(radius.unsigned_abs()) * 2 + 1;
    let free_cells = (-radius..=radius)
        .flat_map(|x| (-radius..=radius).map(move |y| Coordinate::new(x, y)))
        .filter(|cell| !keep_clear.contains(cell));

    let available = usize::try_from(side * side)
        .map_or(usize::MAX, |total| total.saturating_sub(keep_clear.len()));

    // Dense requests would spin on rejection sampling, so enumerate instead
    if count.saturating_mul(2) >= available {
        let mut all: Vec<Coordinate> = free_cells.collect();
        if count >= all.len() {
            return all.into_iter().collect();
        }
        let mut rng = StdRng::seed_from_u64(seed);
        for i in 0..count {
            let j = rng.random_range(i..all.len());
            all.swap(i, j);
        }
        all.truncate(count);
        return all.into_iter().collect();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut obstacles = HashSet::with_capacity(count);
    while obstacles.len() < count {
        let cell = Coordinate::new(
            rng.random_range(-radius..=radius),
            rng.random_range(-radius..=radius),
        );
        if !keep_clear.contains(&cell) {
            obstacles.insert(cell);
        }
    }
    obstacles
}
