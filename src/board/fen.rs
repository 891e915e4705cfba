use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// Position string of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Board::parse_fen(fen).map_err(|err| {
            debug!("rejected position string {fen:?}: {err}");
            err
        })
    }

    fn parse_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file < 8 {
                        board.set_piece(Square::at(file, rank), color, piece);
                    }
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::InvalidRankLength { rank: rank + 1, files: file });
                }
            }
            if file != 8 {
                return Err(FenError::InvalidRankLength { rank: rank + 1, files: file });
            }
        }

        // Side to move
        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Castling rights, a subset of KQkq in that order
        if parts[2] != "-" {
            let mut next = 0;
            for c in parts[2].chars() {
                let offset = CASTLING_LETTERS[next..]
                    .iter()
                    .position(|&(_, _, letter)| letter == c)
                    .ok_or(FenError::InvalidCastling { char: c })?;
                let (color, side, _) = CASTLING_LETTERS[next + offset];
                board.castling_rights.set(color, side);
                next += offset + 1;
            }
        }

        // En passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                Square::from_name(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?,
            )
        };

        board.halfmove_clock = parse_counter(parts[4], "halfmove clock")?;
        board.fullmove_number = parse_counter(parts[5], "fullmove number")?;

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation; the exact inverse of
    /// [`Board::try_from_fen`].
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let castling = castling_field(self.castling_rights);
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

const CASTLING_LETTERS: [(Color, CastleSide, char); 4] = [
    (Color::White, CastleSide::King, 'K'),
    (Color::White, CastleSide::Queen, 'Q'),
    (Color::Black, CastleSide::King, 'k'),
    (Color::Black, CastleSide::Queen, 'q'),
];

/// Plain decimal digits only, without sign or leading zeros, so that export
/// reproduces the field exactly.
fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidCounter {
        field: name,
        found: field.to_string(),
    };
    let digits_only = !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (field.len() > 1 && field.starts_with('0')) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

fn castling_field(rights: CastlingRights) -> String {
    let mut castling = String::new();
    for (color, side, c) in CASTLING_LETTERS {
        if rights.has(color, side) {
            castling.push(c);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    castling
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            STARTING_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k3/8/8/8/8/8/8/4K2R w Kq - 0 1",
            "8/8/8/8/k2Pp2Q/8/8/3K4 b - d3 0 1",
            "6b1/7P/8/8/8/8/r7/kr4BK w - - 17 52",
        ] {
            assert_eq!(Board::try_from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_new_matches_starting_fen() {
        assert_eq!(Board::new().to_fen(), STARTING_FEN);
        assert_eq!(Board::from_fen(STARTING_FEN), Board::new());
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_target(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_fen_counters_required() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - -");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 4 }));
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 0");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 5 }));
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 2 }));
        let result = Board::try_from_fen(&format!("{STARTING_FEN} extra"));
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 7 }));
    }

    #[test]
    fn test_fen_error_square_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidRankCount { found: 7 }));
        let result = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidRankLength { rank: 7, files: 7 }));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: '9' })));
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/44p/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert_eq!(result, Err(FenError::InvalidRankLength { rank: 6, files: 9 }));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -3 1");
        assert!(matches!(
            result,
            Err(FenError::InvalidCounter {
                field: "halfmove clock",
                ..
            })
        ));
    }

    #[test]
    fn test_fen_counter_must_be_plain_digits() {
        for (clock, number) in [("+5", "1"), ("05", "1"), ("5a", "1"), ("0", "+1"), ("0", "01")] {
            let fen = format!("4k3/8/8/8/8/8/8/4K3 w - - {clock} {number}");
            assert!(
                matches!(Board::try_from_fen(&fen), Err(FenError::InvalidCounter { .. })),
                "{fen:?} should be rejected"
            );
        }
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 10").unwrap();
        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 10");
    }

    #[test]
    fn test_fen_castling_order_and_repeats() {
        for castling in ["KK", "qKQk", "QK", "kK", "Kqq"] {
            let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {castling} - 0 1");
            assert!(
                matches!(Board::try_from_fen(&fen), Err(FenError::InvalidCastling { .. })),
                "{fen:?} should be rejected"
            );
        }
        for castling in ["KQkq", "Kk", "Qq", "q"] {
            let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {castling} - 0 1");
            assert_eq!(Board::from_fen(&fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, CastleSide::King));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        assert!(!rights.has(Color::Black, CastleSide::King));
        assert!(rights.has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }
}
