//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - validated board coordinate
//! - `CastleSide` and `CastlingRights` - castling state
//! - `Move`, `AlgebraicMove` and `Source` - notation-level moves

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{AlgebraicMove, Move, Source};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
