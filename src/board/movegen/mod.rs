mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, CastleSide, Move, Piece, Ply, Square, PROMOTION_PIECES};
use sliders::SliderType;

impl Board {
    /// Destinations the piece on `from` reaches by its movement pattern alone,
    /// ignoring whether its own king is left in check. Castling is not included.
    pub(crate) fn pseudo_destinations(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_knight_moves(from, color),
            Piece::King => self.generate_king_moves(from, color),
            Piece::Bishop | Piece::Rook | Piece::Queen => match SliderType::of(piece) {
                Some(slider) => self.generate_slider_moves(from, color, slider),
                None => Vec::new(),
            },
        }
    }

    /// Every legal ply for the player to move. A pawn reaching the back rank
    /// yields one ply per promotion piece.
    pub(crate) fn legal_plies(&self) -> Vec<Ply> {
        let color = self.side_to_move();
        let mut plies = Vec::new();

        for (from, piece) in self.pieces_of(color) {
            for to in self.pseudo_destinations(from) {
                if piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank() {
                    for promo in PROMOTION_PIECES {
                        let ply = Ply::Step {
                            from,
                            to,
                            promotion: Some(promo),
                        };
                        if self.leaves_king_safe(ply) {
                            plies.push(ply);
                        }
                    }
                } else {
                    let ply = Ply::Step {
                        from,
                        to,
                        promotion: None,
                    };
                    if self.leaves_king_safe(ply) {
                        plies.push(ply);
                    }
                }
            }
        }

        plies.extend(
            CastleSide::BOTH
                .into_iter()
                .filter_map(|side| self.castle_ply(side)),
        );
        plies
    }

    /// All legal moves for the player to move, each in canonical notation.
    ///
    /// The moves are distinct; their order follows the board from a1 to h8
    /// with castling last.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_plies()
            .into_iter()
            .map(|ply| self.notation_for(ply))
            .collect()
    }

    /// Legal destinations of the piece on `from`, judged for that piece's
    /// owner whether or not it is their turn. Castling is not included.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.pseudo_destinations(from)
            .into_iter()
            .filter(|&to| {
                self.leaves_king_safe(Ply::Step {
                    from,
                    to,
                    promotion: None,
                })
            })
            .collect()
    }

    /// True if the player to move is in check and has no legal move.
    #[must_use]
    pub fn is_mate(&self) -> bool {
        self.is_in_check() && self.legal_plies().is_empty()
    }

    /// True if the player to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_plies().is_empty()
    }

    /// Count the leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let plies = self.legal_plies();
        if depth == 1 {
            return plies.len() as u64;
        }

        plies
            .iter()
            .map(|&ply| self.after(ply).perft(depth - 1))
            .sum()
    }
}
