//! Candidate computation for empty cells.

use gridlace_core::{DigitSet, Grid, Position};

/// Returns the set of digits that can legally be assigned at `pos`: all
/// digits not already present in the cell's row, column, or containing
/// box.
///
/// The result is recomputed from the grid on every call; nothing is
/// cached across mutations. Cost is one 27-cell house scan.
///
/// The cell at `pos` must be empty. Candidates of an occupied cell are
/// not meaningful, so this is the caller's responsibility (checked in
/// debug builds only).
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, Grid, Position};
/// use gridlace_solver::candidates;
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), Digit::D1);
/// grid.set(Position::new(0, 1), Digit::D2);
///
/// let legal = candidates(&grid, Position::new(0, 8));
/// assert_eq!(legal.len(), 7);
/// assert!(!legal.contains(Digit::D1));
/// assert!(!legal.contains(Digit::D2));
/// ```
#[must_use]
pub fn candidates(grid: &Grid, pos: Position) -> DigitSet {
    debug_assert!(grid.get(pos).is_none(), "candidates queried for occupied cell {pos}");
    DigitSet::FULL.difference(grid.digits_seen_by(pos))
}

#[cfg(test)]
mod tests {
    use gridlace_core::Digit::*;

    use super::*;

    #[test]
    fn test_empty_grid_has_all_candidates() {
        let grid = Grid::new();
        for pos in Position::iter() {
            assert_eq!(candidates(&grid, pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_row_col_box_all_constrain() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 8), D1); // same row
        grid.set(Position::new(8, 0), D2); // same column
        grid.set(Position::new(1, 1), D3); // same box
        grid.set(Position::new(4, 4), D4); // unrelated cell

        let legal = candidates(&grid, Position::new(0, 0));
        assert_eq!(legal, DigitSet::from_iter([D4, D5, D6, D7, D8, D9]));
    }

    #[test]
    fn test_fully_constrained_cell_has_no_candidates() {
        // Row, column, and box collectively hold all nine digits.
        let mut grid = Grid::new();
        grid.set(Position::new(0, 1), D1);
        grid.set(Position::new(0, 2), D2);
        grid.set(Position::new(1, 0), D3);
        grid.set(Position::new(1, 1), D4);
        grid.set(Position::new(0, 5), D5);
        grid.set(Position::new(0, 7), D6);
        grid.set(Position::new(3, 0), D7);
        grid.set(Position::new(5, 0), D8);
        grid.set(Position::new(8, 0), D9);

        assert!(candidates(&grid, Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_duplicate_constraints_counted_once() {
        // The same digit in both the row and the box removes one candidate.
        let mut grid = Grid::new();
        grid.set(Position::new(0, 1), D5);

        let legal = candidates(&grid, Position::new(0, 0));
        assert_eq!(legal.len(), 8);
        assert!(!legal.contains(D5));
    }
}
