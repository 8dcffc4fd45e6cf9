//! Board positions and house (row/column/box) tables.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// Rows and columns are both in the range 0-8, with `(0, 0)` at the top
/// left. Positions identify grid cells; they carry no cell contents.
///
/// # Examples
///
/// ```
/// use gridlace_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All positions of row `y`, in column order.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut table = [[Self { row: 0, col: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                table[y as usize][x as usize] = Self { row: y, col: x };
                x += 1;
            }
            y += 1;
        }
        table
    };

    /// All positions of column `x`, in row order.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut table = [[Self { row: 0, col: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                table[x as usize][y as usize] = Self { row: y, col: x };
                y += 1;
            }
            x += 1;
        }
        table
    };

    /// All positions of box `b` (boxes numbered 0-8, left to right, top to
    /// bottom), in row-major order within the box.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut table = [[Self { row: 0, col: 0 }; 9]; 9];
        let mut b = 0;
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                table[b as usize][i as usize] = Self::from_box(b, i);
                i += 1;
            }
            b += 1;
        }
        table
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a box index (0-8) and a cell index within
    /// the box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self {
            row: box_index / 3 * 3 + i / 3,
            col: box_index % 3 * 3 + i % 3,
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 box containing this position.
    ///
    /// Boxes are numbered 0-8, left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns an iterator over all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Position;
    ///
    /// let mut iter = Position::iter();
    /// assert_eq!(iter.next(), Some(Position::new(0, 0)));
    /// assert_eq!(iter.next(), Some(Position::new(0, 1)));
    /// assert_eq!(iter.count(), 79);
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
