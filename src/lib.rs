pub mod board;

pub use board::{
    AlgebraicMove, Board, BoardBuilder, CastleSide, CastlingRights, Color, FenError, Move,
    MoveError, Piece, Source, Square, SquareError, STARTING_FEN,
};
