//! Backtracking search and the public solve entry points.

use gridlace_core::Grid;

use crate::{
    error::SolveError,
    selector::{Selection, select_cell},
    validate::check_givens,
};

/// The cell value used to signal failure in the numeric-array interface.
pub const UNSOLVABLE_VALUE: i32 = -1;

/// Solves a sudoku puzzle, returning its completed grid.
///
/// The givens are validated first; if they are consistent, a backtracking
/// search guided by the MRV heuristic ([`select_cell`]) fills the grid.
/// The first solution found in ascending candidate order is returned;
/// global uniqueness is assumed, not verified.
///
/// # Errors
///
/// - [`SolveError::InvalidGivens`] if two givens conflict in a row,
///   column, or box. Search is not attempted in this case.
/// - [`SolveError::NoSolution`] if the givens are consistent but the
///   search space is exhausted without completing the grid.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::solve;
///
/// let puzzle: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let solution = solve(&puzzle)?;
/// assert!(solution.is_full());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve(givens: &Grid) -> Result<Grid, SolveError> {
    let mut grid = *givens;
    check_givens(&mut grid)?;
    if search(&mut grid) {
        Ok(grid)
    } else {
        Err(SolveError::NoSolution)
    }
}

/// Solves a puzzle given as a 9x9 numeric array and returns the solution
/// in the same form.
///
/// This is the thin conversion shim over [`solve`]: input cells are `0`
/// (empty) or `1`-`9`, and the result is either the completed grid or -
/// uniformly, for out-of-range input, conflicting givens, and unsolvable
/// puzzles alike - a grid with every cell set to [`UNSOLVABLE_VALUE`].
/// No partially filled grid is ever returned.
///
/// # Examples
///
/// ```
/// use gridlace_solver::solve_values;
///
/// // Two 5s in the top-left box: uniformly -1
/// let mut values = [[0; 9]; 9];
/// values[0][0] = 5;
/// values[1][1] = 5;
/// assert_eq!(solve_values(&values), [[-1; 9]; 9]);
/// ```
#[must_use]
pub fn solve_values(values: &[[i32; 9]; 9]) -> [[i32; 9]; 9] {
    Grid::from_values(values)
        .ok()
        .and_then(|grid| solve(&grid).ok())
        .map_or([[UNSOLVABLE_VALUE; 9]; 9], |solution| solution.to_values())
}

/// Recursive backtracking over the grid.
///
/// Returns `true` when the grid has been completed in place; on `false`
/// the grid is unchanged (every trial assignment has been undone on the
/// way back out).
fn search(grid: &mut Grid) -> bool {
    let (position, candidates) = match select_cell(grid) {
        Selection::Complete => return true,
        Selection::DeadEnd => return false,
        Selection::Branch {
            position,
            candidates,
        } => (position, candidates),
    };

    for digit in candidates {
        grid.set(position, digit);
        if search(grid) {
            return true;
        }
        grid.clear(position);
    }
    false
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use gridlace_core::{Digit, DigitSet, Position};

    use super::*;

    const PUZZLE: &str = "
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

    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    // Consistent givens, but exhaustive search finds no completion.
    const NO_SOLUTION: &str = "
        1__ __6 ___
        _59 ___ __8
        2__ __8 ___
        _45 ___ 3__
        __3 ___ 7__
        __6 __3 _54
        ___ 325 __6
        ___ ___ __1
        738 9__ ___
    ";

    fn assert_valid_solution(grid: &Grid) {
        assert!(grid.is_full());
        for i in 0..9 {
            assert_eq!(grid.digits_in_row(i), DigitSet::FULL);
            assert_eq!(grid.digits_in_col(i), DigitSet::FULL);
            assert_eq!(grid.digits_in_box(i), DigitSet::FULL);
        }
    }

    #[test]
    fn test_solves_canonical_puzzle() {
        let puzzle = Grid::from_str(PUZZLE).unwrap();
        let expected = Grid::from_str(SOLUTION).unwrap();

        let solution = solve(&puzzle).unwrap();
        assert_valid_solution(&solution);
        assert_eq!(solution, expected);
    }

    #[test]
    fn test_solution_preserves_givens() {
        let puzzle = Grid::from_str(PUZZLE).unwrap();
        let solution = solve(&puzzle).unwrap();

        for pos in Position::iter() {
            if let Some(digit) = puzzle.get(pos) {
                assert_eq!(solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_solved_grid_is_returned_unchanged() {
        let solved = Grid::from_str(SOLUTION).unwrap();
        assert_eq!(solve(&solved), Ok(solved));
    }

    #[test]
    fn test_empty_grid_is_solvable() {
        let solution = solve(&Grid::new()).unwrap();
        assert_valid_solution(&solution);
    }

    #[test]
    fn test_conflicting_givens_reported_without_search() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 2), Digit::D5);
        grid.set(Position::new(0, 6), Digit::D5);

        assert_eq!(
            solve(&grid),
            Err(SolveError::InvalidGivens {
                position: Position::new(0, 2),
                digit: Digit::D5,
            })
        );
    }

    #[test]
    fn test_exhausted_search_reports_no_solution() {
        let puzzle = Grid::from_str(NO_SOLUTION).unwrap();
        assert_eq!(solve(&puzzle), Err(SolveError::NoSolution));
    }

    #[test]
    fn test_solve_does_not_mutate_input() {
        let puzzle = Grid::from_str(PUZZLE).unwrap();
        let copy = puzzle;
        let _ = solve(&puzzle);
        assert_eq!(puzzle, copy);
    }

    #[test]
    fn test_values_success() {
        let puzzle = Grid::from_str(PUZZLE).unwrap();
        let expected = Grid::from_str(SOLUTION).unwrap();

        assert_eq!(solve_values(&puzzle.to_values()), expected.to_values());
    }

    #[test]
    fn test_values_sentinel_on_row_duplicate() {
        let mut values = [[0; 9]; 9];
        values[0][0] = 5;
        values[0][4] = 5;

        assert_eq!(solve_values(&values), [[UNSOLVABLE_VALUE; 9]; 9]);
    }

    #[test]
    fn test_values_sentinel_on_box_duplicate() {
        let mut values = [[0; 9]; 9];
        values[0][0] = 9;
        values[2][2] = 9;

        assert_eq!(solve_values(&values), [[UNSOLVABLE_VALUE; 9]; 9]);
    }

    #[test]
    fn test_values_sentinel_on_no_solution() {
        let puzzle = Grid::from_str(NO_SOLUTION).unwrap();
        assert_eq!(solve_values(&puzzle.to_values()), [[UNSOLVABLE_VALUE; 9]; 9]);
    }

    #[test]
    fn test_values_sentinel_on_out_of_range_input() {
        let mut values = [[0; 9]; 9];
        values[4][4] = 12;
        assert_eq!(solve_values(&values), [[UNSOLVABLE_VALUE; 9]; 9]);

        values[4][4] = -3;
        assert_eq!(solve_values(&values), [[UNSOLVABLE_VALUE; 9]; 9]);
    }

    #[test]
    fn test_values_idempotent_on_solved_grid() {
        let solved = Grid::from_str(SOLUTION).unwrap().to_values();
        assert_eq!(solve_values(&solved), solved);
    }
}
