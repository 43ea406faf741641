use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on an 8x8 grid, indexed `[row][col]`.
///
/// Not `Copy`: every duplicate is an explicit `clone()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for col in 0..8 {
            b.cells[1][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.cells[6][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(Color::White, kind));
            b.cells[7][col] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    /// Build a board from the piece-placement field of a FEN record,
    /// e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// Only placement is read; side to move and rights live on `GameState`.
    /// Trailing FEN fields, if present, are ignored.
    pub fn from_placement(placement: &str) -> Result<Self, RulesError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(RulesError::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx as i8; // ranks are listed 8 .. 1
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => {
                            return Err(RulesError::InvalidPlacement(format!(
                                "unknown piece character '{ch}'"
                            )));
                        }
                    };
                    let sq = Square::new(row, col);
                    if !sq.is_on_board() {
                        return Err(RulesError::InvalidPlacement(format!(
                            "too many files in rank {}",
                            row + 1
                        )));
                    }
                    board.set_piece(sq, Some(Piece::new(color, kind)));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(RulesError::InvalidPlacement(format!(
                    "rank {} covers {} files",
                    row + 1,
                    col
                )));
            }
        }
        Ok(board)
    }

    /// Piece on `sq`; `None` for empty or off-board squares.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_on_board() {
            self.cells[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place (or clear) a square. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if sq.is_on_board() {
            self.cells[sq.row as usize][sq.col as usize] = pc;
        }
    }

    /// Clear `sq` and return what stood there.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        let pc = self.piece_at(sq);
        self.set_piece(sq, None);
        pc
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.is(c, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == c)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
