//! Game state aggregate: board plus the auxiliary data legality depends on.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::*;

/// Which rook a castling move uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const KING_COL: i8 = 4;

    /// Side for a king move to column `to_col`, if it is a castling destination.
    pub fn from_king_target(to_col: i8) -> Option<CastleSide> {
        match to_col {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    pub fn rook_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub fn king_target_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on: the square the king crosses.
    pub fn rook_target_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns strictly between king and rook.
    pub fn between_cols(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king stands on or passes through, start to destination.
    pub fn king_path_cols(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[4, 5, 6],
            CastleSide::QueenSide => &[4, 3, 2],
        }
    }
}

/// "Has moved" flags for both kings and the four original rooks.
///
/// Flags only ever go from `false` to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    /// Rook that started on a1.
    pub white_queenside_rook_moved: bool,
    /// Rook that started on h1.
    pub white_kingside_rook_moved: bool,
    /// Rook that started on a8.
    pub black_queenside_rook_moved: bool,
    /// Rook that started on h8.
    pub black_kingside_rook_moved: bool,
}

impl CastlingRights {
    pub fn king_moved(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn rook_moved(&self, c: Color, side: CastleSide) -> bool {
        match (c, side) {
            (Color::White, CastleSide::QueenSide) => self.white_queenside_rook_moved,
            (Color::White, CastleSide::KingSide) => self.white_kingside_rook_moved,
            (Color::Black, CastleSide::QueenSide) => self.black_queenside_rook_moved,
            (Color::Black, CastleSide::KingSide) => self.black_kingside_rook_moved,
        }
    }

    /// Whether neither the king nor the rook on `side` has moved.
    pub fn may_castle(&self, c: Color, side: CastleSide) -> bool {
        !self.king_moved(c) && !self.rook_moved(c, side)
    }

    /// Record that `piece` left `from`.
    pub fn note_departure(&mut self, piece: Piece, from: Square) {
        match piece.kind {
            PieceKind::King => match piece.color {
                Color::White => self.white_king_moved = true,
                Color::Black => self.black_king_moved = true,
            },
            PieceKind::Rook => self.retire_rook(piece.color, from),
            _ => {}
        }
    }

    /// Record that `piece` was captured on `on`. A rook taken on its original
    /// corner can never castle, even if another rook later stands there.
    pub fn note_capture(&mut self, piece: Piece, on: Square) {
        if piece.kind == PieceKind::Rook {
            self.retire_rook(piece.color, on);
        }
    }

    fn retire_rook(&mut self, c: Color, sq: Square) {
        if sq.row != c.back_row() {
            return;
        }
        let flag = match (c, sq.col) {
            (Color::White, 0) => &mut self.white_queenside_rook_moved,
            (Color::White, 7) => &mut self.white_kingside_rook_moved,
            (Color::Black, 0) => &mut self.black_queenside_rook_moved,
            (Color::Black, 7) => &mut self.black_kingside_rook_moved,
            _ => return,
        };
        *flag = true;
    }
}

/// The immediately preceding move; enough to decide en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    /// A pawn advancing two rows in one move.
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && (self.to.row - self.from.row).abs() == 2
    }
}

/// Everything the engine needs to judge and apply the next move.
///
/// Owned by the caller and passed into the engine; it is only ever mutated by
/// [`crate::apply::apply`], one committed move at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub last_move: Option<LastMove>,
    /// Audit trail of applied moves. Never consulted for legality.
    pub history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard start, White to move, nothing has moved yet.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Arbitrary position with untouched castling flags and no last move.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            castling: CastlingRights::default(),
            last_move: None,
            history: Vec::new(),
        }
    }
}
