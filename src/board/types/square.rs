//! Board squares.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as a compact 0-63 index.
///
/// Index layout runs from Black's back rank down: row 0 is the 8th rank and
/// row 7 the 1st, with `index = col + 8 * row`. So "a8" = 0, "h8" = 7,
/// "a1" = 56 and "h1" = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square from column and row (both 0-7).
    /// Does not perform bounds checking - use `try_new` for checked construction.
    #[inline]
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Square((col + row * 8) as u8)
    }

    /// Create a new square with bounds checking.
    ///
    /// Takes signed coordinates so callers can apply movement offsets
    /// without intermediate range checks.
    #[inline]
    #[must_use]
    pub const fn try_new(col: isize, row: isize) -> Option<Self> {
        if col >= 0 && col < 8 && row >= 0 && row < 8 {
            Some(Square::new(col as usize, row as usize))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Get the square's index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Apply a (column, row) offset, returning `None` when it leaves the board.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, dc: isize, dr: isize) -> Option<Self> {
        Square::try_new(self.col() as isize + dc, self.row() as isize + dr)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col() as u8 + b'a') as char, 8 - self.row())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(invalid)?;
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            r @ '1'..='8' => 8 - (r as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square::new(col, row))
    }
}
