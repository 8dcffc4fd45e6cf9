//! A 9x9 sudoku constraint-satisfaction solver.
//!
//! The solver treats the puzzle as a CSP: empty cells are variables, the
//! digits 1-9 are their domains, and the row/column/box uniqueness rules
//! are the constraints. Four cooperating pieces implement it:
//!
//! 1. **Validator** ([`check_givens`]) - rejects grids whose givens
//!    already conflict, before any search.
//! 2. **Candidate engine** ([`candidates`]) - the legal digits for an
//!    empty cell, recomputed per query.
//! 3. **MRV selector** ([`select_cell`]) - picks the empty cell with the
//!    fewest candidates and detects dead ends early.
//! 4. **Backtracking search** ([`solve`]) - assigns a candidate, recurses,
//!    and undoes the assignment when the branch fails.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::Grid;
//! use gridlace_solver::solve;
//!
//! let puzzle: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solution = solve(&puzzle)?;
//! assert!(solution.is_full());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Callers working with plain numeric arrays (`0` = empty) can use
//! [`solve_values`], which reports every failure - malformed input,
//! conflicting givens, no solution - as a grid filled with `-1`.

pub use self::{
    candidates::candidates,
    error::SolveError,
    selector::{Selection, select_cell},
    solve::{UNSOLVABLE_VALUE, solve, solve_values},
    validate::check_givens,
};

mod candidates;
mod error;
mod selector;
mod solve;
mod validate;
