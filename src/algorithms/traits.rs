use crate::map::{Grid, Position};

pub trait SearchAlgorithm {
    /// Plans a route from `start` to `goal`. The outcome carries the
    /// route (if one exists) and how many cells were popped from the
    /// frontier along the way.
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> SearchOutcome;

    fn name(&self) -> &'static str;
}

/// Result of a single search invocation. `path` is `None` when the goal
/// is unreachable — a normal outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Vec<Position>>,
    pub explored: usize,
}
