use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::map::{Grid, Position};

use super::path::reconstruct;
use super::traits::{SearchAlgorithm, SearchOutcome};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    h_score: usize,
    position: Position,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .h_score
            .cmp(&self.h_score)
            .then_with(|| self.position.row.cmp(&other.position.row))
            .then_with(|| self.position.col.cmp(&other.position.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy best-first search: expands purely by Manhattan distance to the
/// goal, ignoring accumulated cost. Typically explores fewer cells than
/// the informed search but the route it returns may cost more.
pub struct Greedy;

impl SearchAlgorithm for Greedy {
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome {
        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut visited: HashSet<Position> = HashSet::new();
        let mut explored = 0;

        open_set.push(State {
            h_score: start.manhattan_distance(goal),
            position: start,
        });

        while let Some(State { position, .. }) = open_set.pop() {
            explored += 1;

            if position == goal {
                return SearchOutcome {
                    path: Some(reconstruct(&came_from, position)),
                    explored,
                };
            }

            visited.insert(position);

            for neighbor in grid.neighbors(position) {
                if visited.contains(&neighbor) {
                    continue;
                }

                came_from.insert(neighbor, position);
                // marked at push time: each cell enters the frontier at
                // most once, so a cheaper approach found later is ignored
                visited.insert(neighbor);
                open_set.push(State {
                    h_score: neighbor.manhattan_distance(goal),
                    position: neighbor,
                });
            }
        }

        SearchOutcome {
            path: None,
            explored,
        }
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}
