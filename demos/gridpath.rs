//! Command-line pathfinding demo.
//!
//! Run: cargo run --bin gridpath -- --random 21x41 --maze --algorithm all

use std::path::PathBuf;

use clap::Parser;
use gridpath_demos::{
    DEFAULT_SIZE, GenOptions, Size, generate, load_config, load_grid, parse_algorithms, report,
    summary,
};
use gridpath_search::{Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "gridpath")]
#[command(about = "Run grid search algorithms and print their traces", long_about = None)]
struct Args {
    /// ASCII map file (`.` empty, `#` wall, `S` start, `E` end, `2`-`9` weight)
    #[arg(short, long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Generate a random grid of this size, e.g. 21x41
    #[arg(short, long)]
    random: Option<Size>,

    /// Seed for grid generation
    #[arg(long)]
    seed: Option<u64>,

    /// Wall density for generated grids
    #[arg(long, default_value_t = 0.25)]
    walls: f64,

    /// Weight density for generated grids
    #[arg(long, default_value_t = 0.0)]
    weights: f64,

    /// Highest cell cost for generated weights (2-9)
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(2..=9))]
    max_cost: u32,

    /// Start generated grids from a recursive-division maze
    #[arg(long)]
    maze: bool,

    /// Algorithm name, or `all`
    #[arg(short, long, default_value = "a-star")]
    algorithm: String,

    /// JSON solver config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };
    let algorithms = parse_algorithms(&args.algorithm)?;

    let grid = match &args.map {
        Some(path) => load_grid(path)?,
        None => {
            let opts = GenOptions {
                seed: args.seed,
                walls: args.walls,
                weights: args.weights,
                max_cost: args.max_cost,
                maze: args.maze,
            };
            generate(args.random.unwrap_or(DEFAULT_SIZE), &opts)?
        }
    };

    let solver = Solver::new(config);
    log::debug!("solver config: {:?}", solver.config());
    let single = algorithms.len() == 1;
    for alg in algorithms {
        match solver.solve_endpoints(&grid, alg) {
            Ok(sol) if single => print!("{}", report(&sol)),
            Ok(sol) => println!("{}", summary(&sol)),
            Err(e) => {
                log::warn!("{alg} failed: {e}");
                println!("{:<15} {e}", alg.name());
            }
        }
    }
    Ok(())
}
