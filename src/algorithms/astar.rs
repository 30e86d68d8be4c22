use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::map::{Grid, Position};

use super::path::reconstruct;
use super::traits::{SearchAlgorithm, SearchOutcome};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    f_score: usize,
    g_score: usize,
    position: Position,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| self.position.row.cmp(&other.position.row))
            .then_with(|| self.position.col.cmp(&other.position.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost-optimal informed search: expands by `f = g + h` with Manhattan
/// distance as the heuristic. The first pop of the goal yields a
/// minimum-cost route.
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome {
        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut g_scores: HashMap<Position, usize> = HashMap::new();
        let mut explored = 0;

        g_scores.insert(start, 0);
        open_set.push(State {
            f_score: start.manhattan_distance(goal),
            g_score: 0,
            position: start,
        });

        while let Some(State {
            position, g_score, ..
        }) = open_set.pop()
        {
            explored += 1;

            if position == goal {
                return SearchOutcome {
                    path: Some(reconstruct(&came_from, position)),
                    explored,
                };
            }

            // stale frontier entry, superseded by a cheaper relaxation
            if g_score > g_scores.get(&position).copied().unwrap_or(usize::MAX) {
                continue;
            }

            for neighbor in grid.neighbors(position) {
                let tentative_g = g_score + grid.entry_cost(neighbor);
                let current_g = g_scores.get(&neighbor).copied().unwrap_or(usize::MAX);

                if tentative_g < current_g {
                    g_scores.insert(neighbor, tentative_g);
                    came_from.insert(neighbor, position);

                    let f_score = tentative_g + neighbor.manhattan_distance(goal);
                    open_set.push(State {
                        f_score,
                        g_score: tentative_g,
                        position: neighbor,
                    });
                }
            }
        }

        SearchOutcome {
            path: None,
            explored,
        }
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::algorithms::path_cost;
    use crate::map::Cell;

    const DEMO: &str = "\
R...#..C
.T#.T.#.
........
#.#.#T..
";

    const WALLED_GOAL: &str = "\
R.#
..#
##C
";

    fn endpoints(grid: &Grid) -> (Position, Position) {
        (
            grid.locate(Cell::Start).unwrap(),
            grid.locate(Cell::Goal).unwrap(),
        )
    }

    fn assert_valid_route(grid: &Grid, path: &[Position], start: Position, goal: Position) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
        for &pos in path {
            assert!(grid.is_traversable(pos));
        }
    }

    /// Exhaustive minimum over all simple routes; only viable on tiny
    /// grids.
    fn brute_force_min_cost(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
        fn walk(
            grid: &Grid,
            current: Position,
            goal: Position,
            visited: &mut HashSet<Position>,
            cost: usize,
            best: &mut Option<usize>,
        ) {
            if current == goal {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            for neighbor in grid.neighbors(current) {
                if visited.insert(neighbor) {
                    walk(
                        grid,
                        neighbor,
                        goal,
                        visited,
                        cost + grid.entry_cost(neighbor),
                        best,
                    );
                    visited.remove(&neighbor);
                }
            }
        }

        let mut best = None;
        let mut visited = HashSet::from([start]);
        walk(grid, start, goal, &mut visited, 0, &mut best);
        best
    }

    #[test]
    fn demo_map_route_costs_eleven() {
        let grid = Grid::parse(DEMO).unwrap();
        let (start, goal) = endpoints(&grid);

        let outcome = AStar.search(&grid, start, goal);
        let path = outcome.path.expect("demo map has a route");

        assert_valid_route(&grid, &path, start, goal);
        assert_eq!(path_cost(&grid, &path), 11);
        assert_eq!(path.len(), 12);
        assert!(outcome.explored >= path.len());
    }

    #[test]
    fn matches_brute_force_on_small_grids() {
        let maps = [
            "R.T.\n.#..\n.T#.\n...C",
            "RT\nTC",
            "R.T\nT#.\n..C",
            "R....\n.###.\n....C",
        ];
        for map in maps {
            let grid = Grid::parse(map).unwrap();
            let (start, goal) = endpoints(&grid);

            let expected = brute_force_min_cost(&grid, start, goal).unwrap();
            let outcome = AStar.search(&grid, start, goal);
            let path = outcome.path.expect("route exists");

            assert_valid_route(&grid, &path, start, goal);
            assert_eq!(path_cost(&grid, &path), expected, "map:\n{}", map);
        }
    }

    #[test]
    fn walled_off_goal_is_a_data_outcome() {
        let grid = Grid::parse(WALLED_GOAL).unwrap();
        let (start, goal) = endpoints(&grid);

        let outcome = AStar.search(&grid, start, goal);
        assert_eq!(outcome.path, None);

        let passable = (0..grid.height())
            .flat_map(|r| (0..grid.width()).map(move |c| Position::new(r, c)))
            .filter(|&p| grid.is_traversable(p))
            .count();
        assert!(outcome.explored >= 1);
        assert!(outcome.explored <= passable);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let grid = Grid::parse(DEMO).unwrap();
        let (start, goal) = endpoints(&grid);

        let first = AStar.search(&grid, start, goal);
        let second = AStar.search(&grid, start, goal);
        assert_eq!(first, second);
    }

    #[test]
    fn start_equal_to_goal_is_a_single_cell_route() {
        let grid = Grid::parse("RC").unwrap();
        let start = grid.locate(Cell::Start).unwrap();

        let outcome = AStar.search(&grid, start, start);
        assert_eq!(outcome.path, Some(vec![start]));
        assert_eq!(outcome.explored, 1);
    }
}
