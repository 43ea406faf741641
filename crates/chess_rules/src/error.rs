//! Error types for rule queries and move application.

use crate::types::{Color, PieceKind, Square, Status};

/// Why a move or position was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} does not belong to {expected}, the side to move")]
    WrongSide { square: Square, expected: Color },

    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// A king is missing. Legal play can never produce this; the state was
    /// built or mutated incorrectly upstream.
    #[error("corrupt game state: no {0} king on the board")]
    CorruptState(Color),

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("game is over: {0}")]
    GameOver(Status),
}
