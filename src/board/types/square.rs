//! Square types and utilities.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
pub(crate) const RANK_NAMES: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

pub(crate) fn file_from_char(c: char) -> Option<usize> {
    FILE_NAMES.iter().position(|&f| f == c)
}

pub(crate) fn rank_from_char(c: char) -> Option<usize> {
    RANK_NAMES.iter().position(|&r| r == c)
}

/// A square on the chess board, stored as its linear index (a1=0, b1=1, ..., h8=63).
///
/// Name, index and (file, rank) pair are equivalent views of the same value;
/// every constructor validates its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from a linear index (0-63)
    pub fn from_index(index: usize) -> Result<Self, SquareError> {
        if index < 64 {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::IndexOutOfBounds { index })
        }
    }

    /// Create a square from a (file, rank) pair, both 0-7
    pub fn from_coords(file: usize, rank: usize) -> Result<Self, SquareError> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square((rank * 8 + file) as u8))
    }

    /// Create a square from its algebraic name, e.g. "e4"
    pub fn from_name(name: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidNotation {
            notation: name.to_string(),
        };
        let mut chars = name.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        match (file_from_char(f), rank_from_char(r)) {
            (Some(file), Some(rank)) => Ok(Square::at(file, rank)),
            _ => Err(invalid()),
        }
    }

    /// Returns true if `name` is a valid algebraic square name
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        Square::from_name(name).is_ok()
    }

    /// Returns true if `index` is in 0..64
    #[must_use]
    pub const fn is_valid_index(index: usize) -> bool {
        index < 64
    }

    /// Returns true if both coordinates are in 0..8
    #[must_use]
    pub const fn is_valid_coords(file: usize, rank: usize) -> bool {
        file < 8 && rank < 8
    }

    /// Unchecked constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(file: usize, rank: usize) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square((rank * 8 + file) as u8)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the square's linear index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Algebraic name of the square
    #[must_use]
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Step by a (file, rank) offset, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as usize, rank as usize))
        } else {
            None
        }
    }

    pub(crate) const fn file_char(self) -> char {
        FILE_NAMES[self.file()]
    }

    pub(crate) const fn rank_char(self) -> char {
        RANK_NAMES[self.rank()]
    }
}

impl Add<(i8, i8)> for Square {
    type Output = Option<Square>;

    fn add(self, (df, dr): (i8, i8)) -> Option<Square> {
        self.offset(df, dr)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        Square::from_coords(file, rank)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_name(s)
    }
}
