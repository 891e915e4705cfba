//! Castling sides and castling rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// The side of the board a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    #[inline]
    const fn index(self) -> usize {
        match self {
            CastleSide::King => 0,
            CastleSide::Queen => 1,
        }
    }

    /// File the king lands on (g or c)
    #[inline]
    #[must_use]
    pub const fn king_destination_file(self) -> usize {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// File the rook lands on (f or d)
    #[inline]
    #[must_use]
    pub const fn rook_destination_file(self) -> usize {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// Rook file in the standard starting position (h or a)
    #[inline]
    #[must_use]
    pub const fn standard_rook_file(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Castling notation, "0-0" or "0-0-0"
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::King => "0-0",
            CastleSide::Queen => "0-0-0",
        }
    }
}

/// Castling rights: for each color and side, the file of the rook that may
/// still castle, or nothing once the right is lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights([[Option<u8>; 2]; 2]);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([[None; 2]; 2])
    }

    /// Both colors may castle on both sides with rooks on the a- and h-files
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights([[Some(7), Some(0)], [Some(7), Some(0)]])
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0[color.index()][side.index()].is_some()
    }

    /// File of the rook tracked for this right, if the right is still held
    #[inline]
    #[must_use]
    pub fn rook_file(self, color: Color, side: CastleSide) -> Option<usize> {
        self.0[color.index()][side.index()].map(usize::from)
    }

    /// Grant a castling right with the rook on its standard file
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.set_with_rook(color, side, side.standard_rook_file());
    }

    /// Grant a castling right with the rook on the given file
    #[inline]
    pub fn set_with_rook(&mut self, color: Color, side: CastleSide, rook_file: usize) {
        debug_assert!(rook_file < 8);
        self.0[color.index()][side.index()] = Some(rook_file as u8);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0[color.index()][side.index()] = None;
    }

    /// Remove both castling rights of a color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0[color.index()] = [None; 2];
    }

    /// Returns true if no color may castle on any side
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == CastlingRights::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_none() {
        let all = CastlingRights::all();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                assert!(all.has(color, side));
                assert_eq!(all.rook_file(color, side), Some(side.standard_rook_file()));
            }
        }
        assert!(CastlingRights::none().is_empty());
        assert_eq!(CastlingRights::default(), CastlingRights::none());
    }

    #[test]
    fn test_remove_color_keeps_opponent() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        assert!(!rights.has(Color::White, CastleSide::King));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        assert!(rights.has(Color::Black, CastleSide::King));
        assert!(rights.has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_tracked_rook_file() {
        let mut rights = CastlingRights::none();
        rights.set_with_rook(Color::Black, CastleSide::Queen, 1);
        assert_eq!(rights.rook_file(Color::Black, CastleSide::Queen), Some(1));
        rights.remove(Color::Black, CastleSide::Queen);
        assert!(rights.is_empty());
    }
}
