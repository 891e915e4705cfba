//! Notation-level move representation and the short algebraic grammar.
//!
//! ```text
//! move       := castling | algebraic
//! castling   := "0-0" | "0-0-0"
//! algebraic  := piece? src? "x"? square promotion?
//! src        := file | rank | square
//! piece      := one of R N B Q K
//! promotion  := one of R N B Q   (only without a piece letter)
//! ```
//!
//! Parsing only checks syntax. Whether a move is legal, which piece it refers
//! to and whether its capture marker is right are decided by the board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::Piece;
use super::square::{file_from_char, rank_from_char, Square, FILE_NAMES, RANK_NAMES};

/// How much of the moving piece's origin a move spells out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Source {
    /// No source given ("Nf3")
    #[default]
    Any,
    /// Source file given ("Ngf3", "exd5")
    File(usize),
    /// Source rank given ("N1f3")
    Rank(usize),
    /// Full source square given ("Ng1f3", "e2e4")
    Square(Square),
}

impl Source {
    /// Returns true if a piece standing on `square` fits this specifier
    #[inline]
    #[must_use]
    pub fn matches(self, square: Square) -> bool {
        match self {
            Source::Any => true,
            Source::File(file) => square.file() == file,
            Source::Rank(rank) => square.rank() == rank,
            Source::Square(sq) => sq == square,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Any => Ok(()),
            Source::File(file) => write!(f, "{}", FILE_NAMES[*file]),
            Source::Rank(rank) => write!(f, "{}", RANK_NAMES[*rank]),
            Source::Square(sq) => write!(f, "{sq}"),
        }
    }
}

/// A non-castling move as written in notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgebraicMove {
    /// Moving piece; `Pawn` when the notation has no piece letter
    pub piece: Piece,
    pub source: Source,
    pub capture: bool,
    pub dest: Square,
    pub promotion: Option<Piece>,
}

impl AlgebraicMove {
    /// A move of `piece` to `dest` with nothing else specified
    #[must_use]
    pub const fn new(piece: Piece, dest: Square) -> Self {
        AlgebraicMove {
            piece,
            source: Source::Any,
            capture: false,
            dest,
            promotion: None,
        }
    }
}

impl fmt::Display for AlgebraicMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.piece != Piece::Pawn {
            write!(f, "{}", self.piece.to_char().to_ascii_uppercase())?;
        }
        write!(f, "{}", self.source)?;
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}", self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// One ply as written in notation.
///
/// `Move::Empty` is what parsing returns for input that does not follow the
/// grammar; check for it with [`Move::is_present`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Castle(CastleSide),
    Algebraic(AlgebraicMove),
    Empty,
}

impl Move {
    /// Parse short algebraic notation. Never fails: malformed input gives
    /// `Move::Empty`.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Move, Piece, Source};
    ///
    /// let Move::Algebraic(mv) = Move::parse("Ngxf3") else { panic!() };
    /// assert_eq!(mv.piece, Piece::Knight);
    /// assert_eq!(mv.source, Source::File(6));
    /// assert!(mv.capture);
    /// assert!(!Move::parse("Nz9").is_present());
    /// ```
    #[must_use]
    pub fn parse(notation: &str) -> Move {
        match notation {
            "0-0" | "O-O" => return Move::Castle(CastleSide::King),
            "0-0-0" | "O-O-O" => return Move::Castle(CastleSide::Queen),
            _ => {}
        }
        parse_algebraic(notation).map_or(Move::Empty, Move::Algebraic)
    }

    /// True iff this is a castling move or has a destination square
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Move::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self, Move::Castle(_))
    }

    /// Destination square, if this is a non-castling move
    #[must_use]
    pub const fn dest(&self) -> Option<Square> {
        match self {
            Move::Algebraic(mv) => Some(mv.dest),
            _ => None,
        }
    }

    /// Promotion piece, if one is written
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        match self {
            Move::Algebraic(mv) => mv.promotion,
            _ => None,
        }
    }

    /// Returns true if the capture marker is set
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Algebraic(mv) if mv.capture)
    }
}

impl From<AlgebraicMove> for Move {
    fn from(mv: AlgebraicMove) -> Self {
        Move::Algebraic(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Castle(side) => write!(f, "{}", side.notation()),
            Move::Algebraic(mv) => write!(f, "{mv}"),
            Move::Empty => Ok(()),
        }
    }
}

/// Recursive-descent pass over `piece? src? "x"? square promotion?`.
///
/// The optional parts are peeled from both ends: the piece letter from the
/// front, the promotion letter and destination square from the back. What is
/// left in the middle must be a source specifier followed by an optional
/// capture marker.
fn parse_algebraic(notation: &str) -> Option<AlgebraicMove> {
    let chars: Vec<char> = notation.chars().collect();
    let mut rest: &[char] = &chars;

    let piece = match rest.first().copied().and_then(Piece::from_notation_letter) {
        Some(piece) => {
            rest = &rest[1..];
            Some(piece)
        }
        None => None,
    };

    let promotion = match (piece, rest.last().copied()) {
        (None, Some(c)) => match Piece::from_notation_letter(c) {
            Some(promo) if promo.is_promotion_target() => {
                rest = &rest[..rest.len() - 1];
                Some(promo)
            }
            Some(_) => return None,
            None => None,
        },
        _ => None,
    };

    let (middle, dest) = split_square_suffix(rest)?;
    let (middle, capture) = match middle.split_last() {
        Some(('x', head)) => (head, true),
        _ => (middle, false),
    };
    let source = parse_source(middle)?;

    Some(AlgebraicMove {
        piece: piece.unwrap_or(Piece::Pawn),
        source,
        capture,
        dest,
        promotion,
    })
}

fn split_square_suffix(chars: &[char]) -> Option<(&[char], Square)> {
    if chars.len() < 2 {
        return None;
    }
    let (head, tail) = chars.split_at(chars.len() - 2);
    Some((head, parse_square(tail)?))
}

fn parse_square(chars: &[char]) -> Option<Square> {
    match chars {
        [f, r] => Some(Square::at(file_from_char(*f)?, rank_from_char(*r)?)),
        _ => None,
    }
}

fn parse_source(chars: &[char]) -> Option<Source> {
    match chars {
        [] => Some(Source::Any),
        [c] => file_from_char(*c)
            .map(Source::File)
            .or_else(|| rank_from_char(*c).map(Source::Rank)),
        [_, _] => parse_square(chars).map(Source::Square),
        _ => None,
    }
}
