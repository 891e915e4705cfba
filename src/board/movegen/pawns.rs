use super::super::{Board, Color, Square};

impl Board {
    /// Pawn destinations: a push onto an empty square, a double push from the
    /// home rank through two empty squares, and diagonal steps onto an enemy
    /// piece or the en passant target.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut dests = Vec::new();
        let dir = color.pawn_direction();

        if let Some(push) = from + (0, dir) {
            if self.is_empty(push) {
                dests.push(push);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = push + (0, dir) {
                        if self.is_empty(double) {
                            dests.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from + (df, dir) else {
                continue;
            };
            match self.color_at(target) {
                Some(owner) if owner != color => dests.push(target),
                Some(_) => {}
                None => {
                    if self.is_en_passant_capture(target, color) {
                        dests.push(target);
                    }
                }
            }
        }

        dests
    }

    /// The en passant target only exists for the player to move.
    #[inline]
    pub(crate) fn is_en_passant_capture(&self, target: Square, color: Color) -> bool {
        self.en_passant_target == Some(target) && color == self.side_to_move()
    }
}
