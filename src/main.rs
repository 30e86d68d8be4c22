mod algorithms;
mod cli;
mod compare;
mod logging;
mod map;
mod render;

use std::fs;

use clap::Parser;
use eyre::Result;
use log::{debug, info};

use cli::{Args, Command};
use logging::Logger;
use map::Grid;

/// The built-in demo map: `R` start, `C` goal, `#` walls, `T` traffic
/// (cost 5), `.` roads (cost 1).
pub const DEMO_MAP: &str = "\
R...#..C
.T#.T.#.
........
#.#.#T..
";

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = load_grid(&args)?;
    debug!("{}x{} map loaded", grid.height(), grid.width());

    match args.command {
        Command::Solve { algorithm } => {
            let report = compare::run_algorithm(algorithm, &grid)?;
            compare::print_report(&grid, algorithm, &report);
        }
        Command::Compare => {
            compare::run_comparison(&grid)?;
        }
    }

    Ok(())
}

fn load_grid(args: &Args) -> Result<Grid> {
    let text = match &args.map {
        Some(path) => {
            info!("loading map from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            debug!("using built-in demo map");
            DEMO_MAP.to_string()
        }
    };

    Ok(Grid::parse(&text)?)
}
