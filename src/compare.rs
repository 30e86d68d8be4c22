use std::time::{Duration, Instant};

use eyre::Result;
use log::info;

use crate::algorithms::{AStar, Greedy, SearchAlgorithm, SearchOutcome, path_cost};
use crate::cli::Algorithm;
use crate::map::{Cell, Grid};
use crate::render;

#[derive(Debug)]
pub struct RouteReport {
    pub outcome: SearchOutcome,
    pub cost: Option<usize>,
    pub planning_time: Duration,
}

fn algorithm_impl(algorithm: Algorithm) -> &'static dyn SearchAlgorithm {
    match algorithm {
        Algorithm::AStar => &AStar,
        Algorithm::Greedy => &Greedy,
    }
}

/// Runs a single algorithm on the grid, timing the planning phase.
pub fn run_algorithm(algorithm: Algorithm, grid: &Grid) -> Result<RouteReport> {
    let start = grid.locate(Cell::Start)?;
    let goal = grid.locate(Cell::Goal)?;

    let planner = algorithm_impl(algorithm);
    info!("running {}", planner.name());

    let planning_start = Instant::now();
    let outcome = planner.search(grid, start, goal);
    let planning_time = planning_start.elapsed();

    let cost = outcome.path.as_deref().map(|path| path_cost(grid, path));

    Ok(RouteReport {
        outcome,
        cost,
        planning_time,
    })
}

pub fn print_report(grid: &Grid, algorithm: Algorithm, report: &RouteReport) {
    let name = algorithm_impl(algorithm).name();

    match report.outcome.path.as_deref() {
        Some(path) => {
            print!("{}", render::render(grid, path));
            info!(
                "{}: cost {}, {} cells, {} explored, {:?}",
                name,
                report.cost.unwrap_or(0),
                path.len(),
                report.outcome.explored,
                report.planning_time,
            );
        }
        None => {
            info!(
                "{}: no route found ({} explored, {:?})",
                name, report.outcome.explored, report.planning_time,
            );
        }
    }
}

/// Runs every algorithm on the same grid and prints a comparison table.
pub fn run_comparison(grid: &Grid) -> Result<()> {
    let mut results = Vec::new();

    for algorithm in Algorithm::all() {
        let report = run_algorithm(algorithm, grid)?;
        print_report(grid, algorithm, &report);
        results.push((algorithm_impl(algorithm).name(), report));
    }

    print_summary(&results);
    Ok(())
}

fn print_summary(results: &[(&'static str, RouteReport)]) {
    info!("\ncomparison results:");
    info!(
        "{:<10} {:>6} {:>10} {:>12}",
        "algorithm", "cost", "explored", "plan"
    );
    info!("{:-<42}", "");

    for (name, report) in results {
        let cost = report
            .cost
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        info!(
            "{:<10} {:>6} {:>10} {:>12?}",
            name, cost, report.outcome.explored, report.planning_time,
        );
    }

    let routed = results.iter().filter(|(_, r)| r.cost.is_some());
    if let Some((name, report)) = routed.clone().min_by_key(|(_, r)| r.cost) {
        info!(
            "\ncheapest: {} (cost {})",
            name,
            report.cost.unwrap_or(0)
        );
    }
    if let Some((name, report)) = routed.min_by_key(|(_, r)| r.outcome.explored) {
        info!(
            "laziest: {} ({} explored)",
            name, report.outcome.explored
        );
    }
}
