//! Solves a cube from the command line with every strategy.
//!
//! # Usage
//!
//! Pass a 54-character facelet string (faces in `U L F R B D` order):
//!
//! ```sh
//! cargo run -p cubelace-solver --example solve_cube -- yyyyyyyyygggggggggooooooooobbbbbbbbbrrrrrrrrrwwwwwwwww
//! ```
//!
//! Or describe the cube by a scramble:
//!
//! ```sh
//! cargo run -p cubelace-solver --example solve_cube -- --scramble "R U R' U' F2 D"
//! ```
//!
//! Restrict the strategies (case-insensitive, repeatable):
//!
//! ```sh
//! cargo run -p cubelace-solver --example solve_cube -- --scramble "R U" --strategy kociemba
//! ```

use std::{process, time::Instant};

use clap::Parser;
use cubelace_solver::{SolveStrategy, Solver, testing};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Facelet string to solve.
    #[arg(value_name = "CUBE", required_unless_present = "scramble")]
    cube: Option<String>,

    /// Scramble applied to a solved cube instead of a facelet string.
    #[arg(short, long, value_name = "MOVES", conflicts_with = "cube")]
    scramble: Option<String>,

    /// Strategy to run (case-insensitive). Repeatable; defaults to all.
    #[arg(long = "strategy", value_name = "STRATEGY")]
    strategies: Vec<SolveStrategy>,

    /// Length limit of the two-phase search.
    #[arg(long, value_name = "MOVES", default_value_t = 30)]
    max_length: usize,
}

fn main() {
    let args = Args::parse();

    let cube = match (&args.cube, &args.scramble) {
        (Some(cube), _) => cube.clone(),
        (None, Some(scramble)) => {
            if let Err(e) = scramble.parse::<cubelace_solver::MoveSequence>() {
                eprintln!("Invalid scramble: {e}");
                process::exit(2);
            }
            testing::scrambled(scramble)
        }
        (None, None) => unreachable!("clap requires a cube or a scramble"),
    };
    let strategies = if args.strategies.is_empty() {
        SolveStrategy::ALL.to_vec()
    } else {
        args.strategies
    };

    println!("Cube:");
    println!("  {cube}");
    println!();

    let solver = Solver::new().with_kociemba_max_length(args.max_length);
    let results = strategies
        .par_iter()
        .map(|&strategy| {
            let start = Instant::now();
            let result = solver.solve(&cube, strategy);
            (strategy, result, start.elapsed())
        })
        .collect::<Vec<_>>();

    let mut failed = false;
    for (strategy, result, elapsed) in results {
        match result {
            Ok(solution) => {
                println!("{strategy} ({} moves, {elapsed:.2?}):", solution.len());
                println!("  {solution}");
            }
            Err(e) => {
                failed = true;
                println!("{strategy} failed: {e}");
            }
        }
    }
    if failed {
        process::exit(1);
    }
}
