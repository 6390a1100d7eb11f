// This file is part of FruitSort.
//
// FruitSort is free software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// FruitSort is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with FruitSort. If not,
// see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fruitsort::{solve, GoalSpec, Grid, SearchOutcome, Swap};
use tracing_subscriber::EnvFilter;

const REFERENCE_GRID: &str = include_str!("../../demos/reference.txt");

#[derive(Parser)]
#[command(name = "sortfruit")]
#[command(about = "Sort a grid of items into single-category rows with the fewest swaps")]
struct Args {
    /// Grid file: one row per line, cells written as category_size. Defaults to the built-in
    /// 3x10 reference grid.
    grid: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print only the final grid and the cost.
    #[arg(long)]
    quiet: bool,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn show_transformation(cur: &Grid, steps: &[Swap]) {
    println!("{}", cur);
    if steps.len() == 0 { return; }
    let step: Swap = steps[0];
    println!("- swap '{}' at {} with '{}' at {}",
             cur.get(step.a), step.a,
             cur.get(step.b), step.b);
    return show_transformation(&cur.swap(step), &steps[1..]);
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let loaded = match &args.grid {
        Some(path) => Grid::from_file(path),
        None => Grid::parse(REFERENCE_GRID),
    };
    let initial = match loaded {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let goal = GoalSpec::derive(&initial);
    let outcome = match solve(&initial, &goal) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    match outcome {
        SearchOutcome::Solved(solution) => {
            println!("Final\n{}", solution.grid());
            println!("Cost {}", solution.cost());
            println!("Cells moved {}", initial.diff(solution.grid()).len());
            if !args.quiet {
                println!("Path Taken");
                show_transformation(&initial, solution.swaps());
            }
            tracing::info!(stats = %solution.stats(), "search finished");
        }
        SearchOutcome::NoSolution(stats) => {
            println!("No Solution");
            tracing::info!(%stats, "search finished");
        }
    };

    return ExitCode::SUCCESS;
}
