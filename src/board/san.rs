//! Canonical short algebraic notation.
//!
//! The canonical form of a legal move is the shortest notation that still
//! names it uniquely: the source is left out if possible, then given as a
//! file, then a rank, then a full square. Pawn captures always carry their
//! file. The capture marker is set exactly when the move takes a piece.
//!
//! # Examples
//! ```
//! use chess_rules::board::{Board, Move};
//!
//! let board: Board = "3k4/8/8/8/R6R/8/8/4K3 w - - 0 1".parse().unwrap();
//! let mv = board.canonicalize(&Move::parse("Ra4d4")).unwrap();
//! assert_eq!(mv.to_string(), "Rad4");
//! ```

use super::{AlgebraicMove, Board, Move, MoveError, Piece, Ply, Source};

impl Board {
    /// Resolve `mv` and rewrite it in canonical form.
    ///
    /// Canonicalizing a canonical move returns it unchanged.
    pub fn canonicalize(&self, mv: &Move) -> Result<Move, MoveError> {
        let ply = self.resolve(mv)?;
        Ok(self.notation_for(ply))
    }

    /// Canonical notation for a legal ply.
    pub(crate) fn notation_for(&self, ply: Ply) -> Move {
        let (from, to, promotion) = match ply {
            Ply::Castle { side, .. } => return Move::Castle(side),
            Ply::Step {
                from,
                to,
                promotion,
            } => (from, to, promotion),
        };
        let Some(piece) = self.piece_on(from) else {
            return Move::Empty;
        };

        let base = AlgebraicMove {
            piece,
            source: Source::Square(from),
            capture: self.is_capture(from, to),
            dest: to,
            promotion,
        };
        let pawn_capture = piece == Piece::Pawn && from.file() != to.file();
        let sources = [
            Source::Any,
            Source::File(from.file()),
            Source::Rank(from.rank()),
        ];

        sources
            .into_iter()
            .skip(usize::from(pawn_capture))
            .map(|source| AlgebraicMove { source, ..base })
            .find(|candidate| self.resolve(&Move::Algebraic(*candidate)) == Ok(ply))
            .unwrap_or(base)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(fen: &str, notation: &str) -> String {
        let board = Board::from_fen(fen);
        board
            .canonicalize(&Move::parse(notation))
            .unwrap_or_else(|err| panic!("{notation} in {fen}: {err}"))
            .to_string()
    }

    #[test]
    fn test_pawn_moves() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(canonical(start, "e4"), "e4");
        assert_eq!(canonical(start, "e2e4"), "e4");
        assert_eq!(canonical(start, "Ng1f3"), "Nf3");
    }

    #[test]
    fn test_pawn_capture_always_has_file() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        assert_eq!(canonical(fen, "exd5"), "exd5");
        assert_eq!(canonical(fen, "e4d5"), "exd5");
        assert_eq!(canonical(fen, "xd5"), "exd5");
    }

    #[test]
    fn test_en_passant_gets_capture_marker() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        assert_eq!(canonical(fen, "e5f6"), "exf6");
    }

    #[test]
    fn test_file_rank_and_square_disambiguation() {
        // Rooks on a4 and h4 both reach d4
        assert_eq!(canonical("3k4/8/8/8/R6R/8/8/4K3 w - - 0 1", "Ra4d4"), "Rad4");
        // Rooks on a1 and a5 both reach a3
        assert_eq!(canonical("3k4/8/8/R7/8/8/8/R3K3 w - - 0 1", "Ra1a3"), "R1a3");
        // Queens on d4, f4 and d2 all reach e3
        let queens = "8/8/8/7k/3Q1Q2/8/3Q4/K7 w - - 0 1";
        assert_eq!(canonical(queens, "Qd4e3"), "Qd4e3");
        assert_eq!(canonical(queens, "Qf4e3"), "Qfe3");
        assert_eq!(canonical(queens, "Qd2e3"), "Q2e3");
    }

    #[test]
    fn test_pinned_piece_needs_no_disambiguation() {
        // The c3 knight is pinned by the bishop on a5, so only the g1 knight reaches e2
        let fen = "4k3/8/8/b7/8/2N5/8/4K1N1 w - - 0 1";
        assert_eq!(canonical(fen, "Ne2"), "Ne2");
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let fen = "8/P7/8/8/8/8/8/K1k5 w - - 0 1";
        assert_eq!(canonical(fen, "a8"), "a8Q");
        assert_eq!(canonical(fen, "a8N"), "a8N");
    }

    #[test]
    fn test_castling_is_canonical() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(canonical(fen, "O-O"), "0-0");
        assert_eq!(canonical(fen, "0-0-0"), "0-0-0");
    }

    #[test]
    fn test_capture_marker_added() {
        let fen = "4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1";
        assert_eq!(canonical(fen, "Qd5"), "Qxd5");
    }
}
