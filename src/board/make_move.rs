use log::debug;

use super::{Board, CastleSide, Color, Move, MoveError, Piece, Ply, Square};

impl Board {
    /// Play a legal move in place.
    ///
    /// # Panics
    /// Panics if `mv` is not legal in this position. Check with
    /// [`Board::is_legal`] first, or use [`Board::try_apply`].
    pub fn apply(&mut self, mv: &Move) {
        if let Err(err) = self.try_apply(mv) {
            panic!("apply called with an unverified move: {err}");
        }
    }

    /// Play `mv` in place if it is legal; otherwise leave the board untouched.
    pub fn try_apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        let ply = self.resolve(mv)?;
        self.apply_ply(ply);
        debug!("applied {mv}, position now {}", self.to_fen());
        Ok(())
    }

    /// A copy of the board with a legal move played; `self` is not changed.
    ///
    /// # Panics
    /// Panics if `mv` is not legal in this position.
    #[must_use]
    pub fn make_copy_and_apply(&self, mv: &Move) -> Board {
        let mut copy = *self;
        copy.apply(mv);
        copy
    }

    /// Parse a notation string, play it, and return the move in canonical form.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// assert_eq!(board.play("e2e4").unwrap().to_string(), "e4");
    /// assert_eq!(board.play("Nc6").unwrap().to_string(), "Nc6");
    /// assert!(board.play("Ke3").is_err());
    /// ```
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveError> {
        let mv = Move::parse(notation);
        if !mv.is_present() {
            return Err(MoveError::Unparsable {
                notation: notation.to_string(),
            });
        }
        let ply = self.resolve(&mv)?;
        let canonical = self.notation_for(ply);
        self.apply_ply(ply);
        debug!("played {canonical}, position now {}", self.to_fen());
        Ok(canonical)
    }

    /// A copy of the board with `ply` played, without any legality check.
    pub(crate) fn after(&self, ply: Ply) -> Board {
        let mut copy = *self;
        copy.apply_ply(ply);
        copy
    }

    pub(crate) fn apply_ply(&mut self, ply: Ply) {
        match ply {
            Ply::Castle { side, king, rook } => self.apply_castle(side, king, rook),
            Ply::Step {
                from,
                to,
                promotion,
            } => self.apply_step(from, to, promotion),
        }
    }

    fn apply_castle(&mut self, side: CastleSide, king: Square, rook: Square) {
        let color = self.side_to_move();
        let rank = color.back_rank();
        self.remove_piece(king);
        self.remove_piece(rook);
        self.set_piece(
            Square::at(side.king_destination_file(), rank),
            color,
            Piece::King,
        );
        self.set_piece(
            Square::at(side.rook_destination_file(), rank),
            color,
            Piece::Rook,
        );
        self.castling_rights.remove_color(color);
        self.en_passant_target = None;
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        self.finish_turn(color);
    }

    fn apply_step(&mut self, from: Square, to: Square, promotion: Option<Piece>) {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        let mut captured = self.piece_at(to).is_some();

        // En passant: the captured pawn stands beside the mover, not on `to`.
        if piece == Piece::Pawn
            && !captured
            && to.file() != from.file()
            && self.is_en_passant_capture(to, color)
        {
            self.remove_piece(Square::at(to.file(), from.rank()));
            captured = true;
        }

        self.en_passant_target = None;
        if piece == Piece::Pawn && to.rank().abs_diff(from.rank()) == 2 {
            self.en_passant_target = Some(Square::at(from.file(), (from.rank() + to.rank()) / 2));
        }

        self.remove_piece(from);
        let placed = if piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank() {
            promotion.unwrap_or(Piece::Queen)
        } else {
            piece
        };
        self.set_piece(to, color, placed);

        self.revoke_castling_rights(color, piece, from, to);

        if piece == Piece::Pawn || captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        self.finish_turn(color);
    }

    /// A king move loses both rights; a rook leaving its tracked square loses
    /// that side; a capture on the opponent's tracked rook square loses theirs.
    fn revoke_castling_rights(&mut self, color: Color, piece: Piece, from: Square, to: Square) {
        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for side in CastleSide::BOTH {
            if self.tracked_rook_square(color, side) == Some(from) {
                self.castling_rights.remove(color, side);
            }
            let opponent = color.opponent();
            if self.tracked_rook_square(opponent, side) == Some(to) {
                self.castling_rights.remove(opponent, side);
            }
        }
    }

    fn tracked_rook_square(&self, color: Color, side: CastleSide) -> Option<Square> {
        self.castling_rights
            .rook_file(color, side)
            .map(|file| Square::at(file, color.back_rank()))
    }

    fn finish_turn(&mut self, mover: Color) {
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.white_to_move = mover == Color::Black;
    }
}
