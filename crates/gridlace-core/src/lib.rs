//! Core data structures for the gridlace sudoku solver.
//!
//! This crate provides the grid representation shared by the solver:
//!
//! 1. **Cell values** - [`Digit`], a type-safe digit 1-9; an empty cell is
//!    `Option::<Digit>::None`.
//! 2. **Candidate sets** - [`DigitSet`], a 9-bit mask over digits 1-9 with
//!    O(1) membership, removal, and cardinality.
//! 3. **Positions** - [`Position`], a (row, column) pair with box
//!    arithmetic and const tables of every row, column, and box.
//! 4. **The grid** - [`Grid`], 9x9 cells with house digit scans, string
//!    parsing/formatting, and conversion to and from the external numeric
//!    array form (`0` empty, `1`-`9` assigned).
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Digit, DigitSet, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Digit::D5);
//!
//! // Digits legal at a cell: everything its row, column, and box lack
//! let pos = Position::new(0, 8);
//! let legal = DigitSet::FULL.difference(grid.digits_seen_by(pos));
//! assert!(!legal.contains(Digit::D5)); // 5 already in row 0
//! assert_eq!(legal.len(), 8);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridError},
    position::Position,
};
