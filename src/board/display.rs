use std::fmt;

use super::{Board, Square};

impl Board {
    /// Text diagram of the position, rank 8 at the top, followed by the
    /// position string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("  +---+---+---+---+---+---+---+---+\n");
        for rank in (0..8).rev() {
            out.push_str(&format!("{} |", rank + 1));
            for file in 0..8 {
                let ch = self
                    .piece_at(Square::at(file, rank))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                out.push_str(&format!(" {ch} |"));
            }
            out.push_str("\n  +---+---+---+---+---+---+---+---+\n");
        }
        out.push_str("    a   b   c   d   e   f   g   h\n");
        out.push_str(&self.to_fen());
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
