//! The 9x9 value grid and its external representations.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Error raised when constructing a [`Grid`] from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A numeric cell value was outside the range 0-9.
    #[display("cell value out of range: {value}")]
    ValueOutOfRange {
        /// The offending value.
        value: i32,
    },
    /// A grid string contained a character that is not a digit, an empty
    /// marker, or whitespace.
    #[display("invalid character in grid string: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// A grid string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9x9 sudoku grid of optionally assigned digits.
///
/// Each cell holds `Option<Digit>`; `None` is an unassigned cell (the `0`
/// of the external numeric representation). The type is `Copy`, so callers
/// can snapshot a grid before handing it to mutating code.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert!(!grid.is_full());
///
/// grid.set(Position::new(0, 0), Digit::D5);
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(grid.digits_in_row(0).contains(Digit::D5));
/// ```
///
/// Grids can be parsed from the usual 81-cell string form, where `_`, `.`
/// and `0` mark empty cells and whitespace is ignored:
///
/// ```
/// use gridlace_core::Grid;
///
/// let grid: Grid = "
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
/// assert_eq!(grid.empty_count(), 51);
/// # Ok::<(), gridlace_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Assigns a digit to a cell.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.row() as usize][pos.col() as usize] = Some(digit);
    }

    /// Clears a cell, returning the digit it held.
    pub const fn clear(&mut self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize].take()
    }

    /// Returns `true` if every cell is assigned.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns the number of unassigned cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Returns the set of digits assigned in row `y`.
    #[must_use]
    pub fn digits_in_row(&self, y: u8) -> DigitSet {
        self.digits_in(&Position::ROWS[usize::from(y)])
    }

    /// Returns the set of digits assigned in column `x`.
    #[must_use]
    pub fn digits_in_col(&self, x: u8) -> DigitSet {
        self.digits_in(&Position::COLUMNS[usize::from(x)])
    }

    /// Returns the set of digits assigned in box `b`.
    #[must_use]
    pub fn digits_in_box(&self, b: u8) -> DigitSet {
        self.digits_in(&Position::BOXES[usize::from(b)])
    }

    /// Returns the union of the digits assigned in the row, column, and
    /// box containing `pos` (27 cell inspections, with overlap).
    #[must_use]
    pub fn digits_seen_by(&self, pos: Position) -> DigitSet {
        self.digits_in_row(pos.row())
            | self.digits_in_col(pos.col())
            | self.digits_in_box(pos.box_index())
    }

    fn digits_in(&self, positions: &[Position; 9]) -> DigitSet {
        positions
            .iter()
            .filter_map(|&pos| self.get(pos))
            .collect()
    }

    /// Creates a grid from a 9x9 numeric array, where `0` marks an empty
    /// cell and `1`-`9` are assigned digits.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] if any value is outside
    /// `0..=9`.
    pub fn from_values(values: &[[i32; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (row, pos_row) in values.iter().zip(&Position::ROWS) {
            for (&value, &pos) in row.iter().zip(pos_row) {
                if value == 0 {
                    continue;
                }
                let digit = u8::try_from(value)
                    .ok()
                    .and_then(Digit::try_from_value)
                    .ok_or(GridError::ValueOutOfRange { value })?;
                grid.set(pos, digit);
            }
        }
        Ok(grid)
    }

    /// Converts the grid to a 9x9 numeric array, with `0` for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [[i32; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for (row, value_row) in self.cells.iter().zip(&mut values) {
            for (cell, value) in row.iter().zip(value_row) {
                *value = cell.map_or(0, |digit| i32::from(digit.value()));
            }
        }
        values
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut positions = Position::iter();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '_' | '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character.to_digit(10).unwrap_or_default() as u8;
                    Digit::try_from_value(value)
                }
                _ => return Err(GridError::InvalidCharacter { character }),
            };
            count += 1;
            let Some(pos) = positions.next() else {
                continue;
            };
            if let Some(digit) = cell {
                grid.set(pos, digit);
            }
        }
        if count != 81 {
            return Err(GridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 && x % 3 == 0 {
                    f.write_char(' ')?;
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('_')?,
                }
            }
        }
        Ok(())
    }
}
