//! Example demonstrating end-to-end puzzle solving.
//!
//! This example shows how to:
//! - Parse a puzzle from an 81-cell grid string
//! - Solve it and display the solution
//! - Distinguish invalid givens from unsolvable puzzles
//!
//! # Usage
//!
//! Solve the built-in demo puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a puzzle given on the command line (`.`, `_`, or `0` for empty
//! cells; whitespace is ignored):
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
//! ```
//!
//! Enable timing diagnostics:
//!
//! ```sh
//! RUST_LOG=info cargo run --example solve_puzzle
//! ```

use std::{process, str::FromStr as _, time::Instant};

use clap::Parser;
use gridlace_core::Grid;
use gridlace_solver::{SolveError, solve};

const DEMO_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 cells; digits 1-9 are givens, `.`/`_`/`0` are empty.
    /// Defaults to a built-in demo puzzle.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = args.puzzle.as_deref().unwrap_or(DEMO_PUZZLE);
    let puzzle = match Grid::from_str(input) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Failed to parse puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Puzzle ({} givens):", 81 - puzzle.empty_count());
    println!("{puzzle}");
    println!();

    let start = Instant::now();
    let result = solve(&puzzle);
    log::info!("solve finished in {:?}", start.elapsed());

    match result {
        Ok(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        Err(err @ SolveError::InvalidGivens { .. }) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(1);
        }
        Err(SolveError::NoSolution) => {
            eprintln!("The puzzle has no solution.");
            process::exit(1);
        }
    }
}
