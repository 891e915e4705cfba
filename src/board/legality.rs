//! Move legality.
//!
//! A move is legal when the piece reaches its destination by its movement
//! pattern and, with the move played on a copy of the board, the mover's king
//! is not attacked. Castling has its own preconditions on top of that.

use log::trace;

use super::{AlgebraicMove, Board, CastleSide, Color, Move, MoveError, Piece, Ply, Square};

fn illegal(mv: &impl std::fmt::Display) -> MoveError {
    MoveError::Illegal {
        notation: mv.to_string(),
    }
}

impl Board {
    /// True if `mv` names exactly one legal move in this position.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.resolve(mv).is_ok()
    }

    /// Resolve a notation-level move to the unique legal ply it names.
    pub(crate) fn resolve(&self, mv: &Move) -> Result<Ply, MoveError> {
        match mv {
            Move::Empty => Err(MoveError::Empty),
            Move::Castle(side) => self.castle_ply(*side).ok_or_else(|| {
                trace!("castling {} is not allowed", side.notation());
                illegal(mv)
            }),
            Move::Algebraic(alg) => self.resolve_algebraic(alg),
        }
    }

    /// Disambiguation: collect every piece of the right kind whose square fits
    /// the source specifier and which can legally make the move. Exactly one
    /// candidate must remain.
    fn resolve_algebraic(&self, mv: &AlgebraicMove) -> Result<Ply, MoveError> {
        let color = self.side_to_move();
        let mut candidates = self
            .pieces_of(color)
            .filter(|&(from, piece)| piece == mv.piece && mv.source.matches(from))
            .filter_map(|(from, _)| self.legal_step(from, mv));

        match (candidates.next(), candidates.next()) {
            (Some(ply), None) => Ok(ply),
            (None, _) => {
                trace!("no legal interpretation of {mv}");
                Err(illegal(mv))
            }
            (Some(_), Some(_)) => {
                trace!("{mv} is ambiguous");
                Err(illegal(mv))
            }
        }
    }

    /// The move of the piece on `from` described by `mv`, if it is legal.
    ///
    /// A pawn reaching the back rank without a promotion piece promotes to a
    /// queen; a promotion piece anywhere else is illegal. A capture marker
    /// requires an actual capture.
    fn legal_step(&self, from: Square, mv: &AlgebraicMove) -> Option<Ply> {
        let (color, piece) = self.piece_at(from)?;
        if !self.pseudo_destinations(from).contains(&mv.dest) {
            return None;
        }

        let promotes = piece == Piece::Pawn && mv.dest.rank() == color.pawn_promotion_rank();
        let promotion = match (promotes, mv.promotion) {
            (true, None) => Some(Piece::Queen),
            (true, Some(promo)) if promo.is_promotion_target() => Some(promo),
            (false, None) => None,
            _ => return None,
        };

        if mv.capture && !self.is_capture(from, mv.dest) {
            return None;
        }

        let ply = Ply::Step {
            from,
            to: mv.dest,
            promotion,
        };
        self.leaves_king_safe(ply).then_some(ply)
    }

    /// True if moving the piece on `from` to `to` takes an enemy piece,
    /// directly or en passant.
    pub(crate) fn is_capture(&self, from: Square, to: Square) -> bool {
        match (self.piece_at(from), self.color_at(to)) {
            (Some((color, _)), Some(owner)) => owner != color,
            (Some((color, Piece::Pawn)), None) => {
                to.file() != from.file() && self.is_en_passant_capture(to, color)
            }
            _ => false,
        }
    }

    /// Play `ply` on a copy and check that the mover's king is not attacked.
    pub(crate) fn leaves_king_safe(&self, ply: Ply) -> bool {
        let mover = match ply {
            Ply::Castle { .. } => self.side_to_move(),
            Ply::Step { from, .. } => match self.color_at(from) {
                Some(color) => color,
                None => return false,
            },
        };
        !self.after(ply).is_in_check_for(mover)
    }

    /// Castling for the player to move, if it is legal.
    ///
    /// Requires the right for that side with its rook still on the tracked
    /// file, every square strictly between king and rook empty, the landing
    /// squares free, the king not in check, and no square the king crosses or
    /// lands on attacked.
    pub(crate) fn castle_ply(&self, side: CastleSide) -> Option<Ply> {
        let color = self.side_to_move();
        let (king, rook) = self.castling_squares(color, side)?;
        let rank = color.back_rank();
        let king_dest = Square::at(side.king_destination_file(), rank);
        let rook_dest = Square::at(side.rook_destination_file(), rank);

        let (low, high) = if king.file() < rook.file() {
            (king.file(), rook.file())
        } else {
            (rook.file(), king.file())
        };
        if (low + 1..high).any(|file| !self.is_empty(Square::at(file, rank))) {
            return None;
        }
        let landing_blocked = [king_dest, rook_dest]
            .iter()
            .any(|&sq| sq != king && sq != rook && !self.is_empty(sq));
        if landing_blocked {
            return None;
        }

        if self.is_in_check_for(color) {
            return None;
        }
        let (path_low, path_high) = if king.file() < king_dest.file() {
            (king.file(), king_dest.file())
        } else {
            (king_dest.file(), king.file())
        };
        let opponent = color.opponent();
        if (path_low..=path_high).any(|file| self.is_square_attacked(Square::at(file, rank), opponent))
        {
            return None;
        }

        let ply = Ply::Castle { side, king, rook };
        self.leaves_king_safe(ply).then_some(ply)
    }

    /// King and tracked rook squares for a castling right that is still held
    /// and whose pieces are in place.
    fn castling_squares(&self, color: Color, side: CastleSide) -> Option<(Square, Square)> {
        let rook_file = self.castling_rights.rook_file(color, side)?;
        let rank = color.back_rank();
        let king = self.find_king(color).filter(|sq| sq.rank() == rank)?;
        let rook = Square::at(rook_file, rank);
        if self.piece_at(rook) != Some((color, Piece::Rook)) {
            return None;
        }
        let rook_on_side = match side {
            CastleSide::King => rook.file() > king.file(),
            CastleSide::Queen => rook.file() < king.file(),
        };
        rook_on_side.then_some((king, rook))
    }
}
