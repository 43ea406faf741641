use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn push for this side.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this side's king and rooks at the start of a game.
    pub fn back_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which this side's pawns promote.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into on the last rank.
    pub fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

/// A board coordinate. Row 0 is White's back rank, column 0 is the a-file.
///
/// Components are signed so that offset arithmetic can step off the board;
/// use [`Square::is_on_board`] or [`Square::offset`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Square shifted by `(dr, dc)`, or `None` if that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let to = Square::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        to.is_on_board().then_some(to)
    }

    /// All 64 squares, row by row from a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            let rank = (b'1' + self.row as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(RulesError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new((b[1] - b'1') as i8, (b[0] - b'a') as i8))
    }
}

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A committed move and what it did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from`, before any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub castling: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Side that made the move.
    pub fn color(&self) -> Color {
        self.piece.color
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Active => "active",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
