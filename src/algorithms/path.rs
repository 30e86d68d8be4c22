use std::collections::HashMap;

use crate::map::{Grid, Position};

/// Walks predecessor links back from `end` until a cell has none (the
/// start cell), then reverses so the route runs start to end.
pub fn reconstruct(came_from: &HashMap<Position, Position>, end: Position) -> Vec<Position> {
    let mut path = vec![end];
    let mut current = end;

    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

/// Total cost of a route: the sum of entry costs of every cell after the
/// start (the start cell is never "entered").
pub fn path_cost(grid: &Grid, path: &[Position]) -> usize {
    path.iter().skip(1).map(|&pos| grid.entry_cost(pos)).sum()
}
