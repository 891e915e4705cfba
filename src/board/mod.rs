//! Chess board representation and rules.
//!
//! The board is a 64-slot mailbox. Legality is decided by playing a move on a
//! copy of the board and checking that the mover's king is not attacked.
//! Supports full chess rules including castling, en passant, and promotions,
//! and reads and writes moves in short algebraic notation.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Move};
//!
//! let mut board = Board::new();
//! println!("Starting position has {} legal moves", board.legal_moves().len());
//! let played = board.play("Ng1f3").unwrap();
//! assert_eq!(played, Move::parse("Nf3"));
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod fen;
mod legality;
mod make_move;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use fen::STARTING_FEN;
pub use state::Board;
pub use types::{AlgebraicMove, CastleSide, CastlingRights, Color, Move, Piece, Source, Square};

pub(crate) use state::Ply;
pub(crate) use types::PROMOTION_PIECES;
