use super::super::attack_tables::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::super::{Board, Color, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn of(piece: Piece) -> Option<SliderType> {
        match piece {
            Piece::Bishop => Some(SliderType::Bishop),
            Piece::Rook => Some(SliderType::Rook),
            Piece::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn directions(self) -> &'static [(i8, i8)] {
        const QUEEN: [(i8, i8); 8] = [
            STRAIGHT_DIRECTIONS[0],
            STRAIGHT_DIRECTIONS[1],
            STRAIGHT_DIRECTIONS[2],
            STRAIGHT_DIRECTIONS[3],
            DIAGONAL_DIRECTIONS[0],
            DIAGONAL_DIRECTIONS[1],
            DIAGONAL_DIRECTIONS[2],
            DIAGONAL_DIRECTIONS[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL_DIRECTIONS,
            SliderType::Rook => &STRAIGHT_DIRECTIONS,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    /// Scan each direction square by square, stopping at the first occupied
    /// square: it is included when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<Square> {
        let mut dests = Vec::new();
        for &(df, dr) in slider.directions() {
            let mut next = from + (df, dr);
            while let Some(sq) = next {
                match self.color_at(sq) {
                    Some(owner) if owner == color => break,
                    Some(_) => {
                        dests.push(sq);
                        break;
                    }
                    None => dests.push(sq),
                }
                next = sq + (df, dr);
            }
        }
        dests
    }

    /// True if a slider on `from` reaches `target` through empty squares.
    pub(crate) fn slider_reaches(&self, from: Square, target: Square, slider: SliderType) -> bool {
        let df = target.file() as i8 - from.file() as i8;
        let dr = target.rank() as i8 - from.rank() as i8;
        if df == 0 && dr == 0 {
            return false;
        }
        let straight = df == 0 || dr == 0;
        let diagonal = df.abs() == dr.abs();
        let allowed = match slider {
            SliderType::Bishop => diagonal,
            SliderType::Rook => straight,
            SliderType::Queen => straight || diagonal,
        };
        if !allowed {
            return false;
        }

        let step = (df.signum(), dr.signum());
        let mut next = from + step;
        while let Some(sq) = next {
            if sq == target {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            next = sq + step;
        }
        false
    }
}
