use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Compares cost-optimal and greedy route planning on a city grid")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Map file to load instead of the built-in demo map
    #[arg(short, long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a route with a single algorithm
    Solve {
        /// Search algorithm to use
        #[arg(value_enum)]
        algorithm: Algorithm,
    },

    /// Run every algorithm on the same map and compare metrics
    Compare,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Algorithm {
    /// A* with Manhattan distance heuristic, cost-optimal
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Greedy best-first search, heuristic only, no optimality guarantee
    #[value(name = "greedy", alias = "gbfs")]
    Greedy,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::AStar, Self::Greedy].into_iter()
    }
}
