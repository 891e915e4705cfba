use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::{Board, Color, Piece, Square};
use super::sliders::SliderType;

impl Board {
    /// One step in any direction onto an empty or enemy square. Castling is
    /// generated separately.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        KING_TARGETS[from.index()]
            .iter()
            .copied()
            .filter(|&to| self.color_at(to) != Some(color))
            .collect()
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// True if the piece on `from` threatens `target` by its movement pattern,
    /// whatever stands on `target`. Pawns threaten only their two forward
    /// diagonals.
    pub(crate) fn threatens(&self, from: Square, target: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        match piece {
            Piece::Pawn => {
                target.rank() as i8 - from.rank() as i8 == color.pawn_direction()
                    && target.file().abs_diff(from.file()) == 1
            }
            Piece::Knight => KNIGHT_TARGETS[from.index()].contains(&target),
            Piece::King => KING_TARGETS[from.index()].contains(&target),
            Piece::Bishop | Piece::Rook | Piece::Queen => SliderType::of(piece)
                .is_some_and(|slider| self.slider_reaches(from, target, slider)),
        }
    }

    /// Scan every square for a piece of `attacker_color` threatening `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        self.pieces_of(attacker_color)
            .any(|(from, _)| self.threatens(from, square))
    }

    /// True if `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check_for(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }

    /// True if the player to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_in_check_for(self.side_to_move())
    }
}
