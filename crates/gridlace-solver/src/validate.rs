//! Validation of the given (pre-filled) cells.

use gridlace_core::{Grid, Position};

use crate::{candidates::candidates, error::SolveError};

/// Checks that no given digit conflicts with another given in its row,
/// column, or box.
///
/// Each given is checked by temporarily clearing its cell, asking whether
/// the digit is still a legal candidate there, and restoring the cell.
/// Clearing first means a cell is never compared against itself. The cell
/// is restored on the failing path too, so the grid is left exactly as it
/// was regardless of the outcome.
///
/// # Errors
///
/// Returns [`SolveError::InvalidGivens`] naming the first conflicting
/// cell, in row-major order.
pub fn check_givens(grid: &mut Grid) -> Result<(), SolveError> {
    for pos in Position::iter() {
        let Some(digit) = grid.clear(pos) else {
            continue;
        };
        let legal = candidates(grid, pos).contains(digit);
        grid.set(pos, digit);
        if !legal {
            return Err(SolveError::InvalidGivens {
                position: pos,
                digit,
            });
        }
    }
    Ok(())
}
