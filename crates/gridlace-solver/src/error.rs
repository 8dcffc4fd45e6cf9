use gridlace_core::{Digit, Position};

/// Error returned by [`solve`](crate::solve).
///
/// Both variants mean "no completed grid exists for this input"; they are
/// distinguished so callers can tell a malformed puzzle from a consistent
/// but unsolvable one. Dead ends *during* search are not errors - they are
/// ordinary backtracking - so they never surface here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolveError {
    /// A given digit already conflicts with another given in its row,
    /// column, or box, so search was never attempted.
    #[display("given {digit} at {position} conflicts with another given")]
    InvalidGivens {
        /// The cell whose given is in conflict.
        position: Position,
        /// The conflicting digit.
        digit: Digit,
    },
    /// The givens are consistent but the search space was exhausted
    /// without completing the grid.
    #[display("puzzle has no solution")]
    NoSolution,
}
