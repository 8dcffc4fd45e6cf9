//! MRV (minimum remaining values) cell selection.

use gridlace_core::{DigitSet, Grid, Position};

use crate::candidates::candidates;

/// Outcome of scanning a grid for the next cell to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// No empty cell remains; the grid is a complete solution.
    Complete,
    /// Some empty cell has no legal candidate; this grid cannot be
    /// completed and the caller must backtrack.
    DeadEnd,
    /// The most constrained empty cell, to be branched on next.
    Branch {
        /// The chosen cell.
        position: Position,
        /// Its legal candidates (at least one, possibly several).
        candidates: DigitSet,
    },
}

/// Scans every cell in row-major order and picks the empty cell with the
/// fewest legal candidates.
///
/// This is the MRV ("fail-first") heuristic: branching on the most
/// constrained cell keeps the branching factor small and surfaces
/// contradictions as early as possible. Two shortcuts end the scan early:
///
/// - a zero-candidate cell yields [`Selection::DeadEnd`] immediately -
///   once any cell is dead there is no point finding the true minimum;
/// - a single-candidate cell is returned immediately - a forced
///   assignment cannot be beaten.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::{Selection, select_cell};
///
/// let grid = Grid::new();
/// assert!(matches!(select_cell(&grid), Selection::Branch { .. }));
/// ```
#[must_use]
pub fn select_cell(grid: &Grid) -> Selection {
    let mut best: Option<(Position, DigitSet)> = None;

    for pos in Position::iter() {
        if grid.get(pos).is_some() {
            continue;
        }
        let set = candidates(grid, pos);
        match set.len() {
            0 => return Selection::DeadEnd,
            1 => {
                return Selection::Branch {
                    position: pos,
                    candidates: set,
                };
            }
            len => {
                if best.is_none_or(|(_, best_set)| len < best_set.len()) {
                    best = Some((pos, set));
                }
            }
        }
    }

    match best {
        Some((position, candidates)) => Selection::Branch {
            position,
            candidates,
        },
        None => Selection::Complete,
    }
}
