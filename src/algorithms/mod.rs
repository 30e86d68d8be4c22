mod astar;
mod greedy;
mod path;
pub mod traits;

pub use astar::AStar;
pub use greedy::Greedy;
pub use path::{path_cost, reconstruct};
pub use traits::{SearchAlgorithm, SearchOutcome};
