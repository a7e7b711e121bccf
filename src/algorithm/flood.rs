//! Bounded breadth-first flood-fill over the 4-connected grid
//!
//! Expansion proceeds in rings: every cell of the current frontier is expanded
//! to its orthogonal neighbours in [`Coordinate::adjacents`] order before the
//! next ring starts. A cell is recorded the first time it is reached, so its
//! distance is the minimum hop count from the nearest start. Obstacles are
//! never recorded and never expanded through.

use std::collections::HashMap;

use crate::spatial::coordinate::Coordinate;
use crate::spatial::obstacles::Obstacles;

/// Hop distances from the nearest start for every reachable cell
///
/// Starts map to `0`; every other key maps to the number of orthogonal steps on
/// the shortest obstacle-free route, never more than `max_distance`.
///
/// Starts are seeded even if they also appear in `obstacles`. Duplicate starts
/// collapse to a single entry. `max_distance == 0` returns just the starts.
pub fn flood_fill<I, O>(
    starts: I,
    max_distance: usize,
    obstacles: &O,
) -> HashMap<Coordinate, usize>
where
    I: IntoIterator<Item = Coordinate>,
    O: Obstacles + ?Sized,
{
    let mut distances = HashMap::new();
    let mut frontier = Vec::new();

    for start in starts {
        if distances.insert(start, 0).is_none() {
            frontier.push(start);
        }
    }

    let mut next_frontier = Vec::new();
    for step in 1..=max_distance {
        if frontier.is_empty() {
            break;
        }

        for &cell in &frontier {
            for neighbor in cell.adjacents() {
                if distances.contains_key(&neighbor) || obstacles.is_blocked(neighbor) {
                    continue;
                }
                distances.insert(neighbor, step);
                next_frontier.push(neighbor);
            }
        }

        tracing::trace!(step, reached = next_frontier.len(), "flood-fill ring expanded");

        std::mem::swap(&mut frontier, &mut next_frontier);
        next_frontier.clear();
    }

    tracing::debug!(cells = distances.len(), max_distance, "flood-fill complete");

    distances
}

/// Single-source [`flood_fill`]
pub fn flood_fill_from<O>(
    start: Coordinate,
    max_distance: usize,
    obstacles: &O,
) -> HashMap<Coordinate, usize>
where
    O: Obstacles + ?Sized,
{
    flood_fill([start], max_distance, obstacles)
}
