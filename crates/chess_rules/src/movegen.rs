//! Pseudo-legal target generation for a single piece.
//!
//! Targets obey each piece's movement pattern and board occupancy but ignore
//! whether the move would leave the mover's own king attacked; that is the job
//! of [`crate::legality`].

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::state::{CastleSide, CastlingRights, LastMove};
use crate::types::*;

/// Pseudo-legal target squares for `piece` standing on `from`.
///
/// With `allow_castling` unset the king's castling targets are skipped. The
/// attack detector relies on that mode so that castling (which itself asks
/// whether squares are attacked) is never re-entered.
pub fn pseudo_legal_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    rights: &CastlingRights,
    last_move: Option<&LastMove>,
    allow_castling: bool,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_moves_into(
        board,
        piece,
        from,
        rights,
        last_move,
        allow_castling,
        &mut out,
    );
    out
}

/// Same as [`pseudo_legal_moves`], appending into a caller-owned buffer.
pub fn pseudo_legal_moves_into(
    board: &Board,
    piece: Piece,
    from: Square,
    rights: &CastlingRights,
    last_move: Option<&LastMove>,
    allow_castling: bool,
    out: &mut Vec<Square>,
) {
    let c = piece.color;
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, from, c, last_move, out),
        PieceKind::Knight => gen_steps(board, from, c, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, c, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, from, c, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, from, c, &DIAGONALS, out);
            gen_slider(board, from, c, &ORTHOGONALS, out);
        }
        PieceKind::King => {
            gen_steps(board, from, c, &KING_OFFSETS, out);
            if allow_castling {
                gen_castle(board, from, c, rights, out);
            }
        }
    }
}

/// Squares a pawn of color `c` on `from` captures onto (occupied or not).
pub fn pawn_capture_squares(from: Square, c: Color) -> impl Iterator<Item = Square> {
    [-1, 1]
        .into_iter()
        .filter_map(move |dc| from.offset(c.forward(), dc))
}

fn gen_pawn(
    board: &Board,
    from: Square,
    c: Color,
    last_move: Option<&LastMove>,
    out: &mut Vec<Square>,
) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start row
    if let Some(one) = from.offset(dir, 0)
        && board.is_empty(one)
    {
        out.push(one);
        if from.row == c.pawn_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.is_empty(two)
        {
            out.push(two);
        }
    }

    // captures
    for to in pawn_capture_squares(from, c) {
        if let Some(target) = board.piece_at(to)
            && target.color != c
        {
            out.push(to);
        }
    }

    // en passant: the opposing pawn just advanced two rows to land beside us
    if let Some(last) = last_move
        && last.piece.color != c
        && last.is_double_pawn_push()
        && last.to.row == from.row
        && (last.to.col - from.col).abs() == 1
        && let Some(to) = from.offset(dir, last.to.col - from.col)
        && board.is_empty(to)
    {
        out.push(to);
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(to),
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_castle(
    board: &Board,
    from: Square,
    c: Color,
    rights: &CastlingRights,
    out: &mut Vec<Square>,
) {
    let row = c.back_row();
    // Must be on the original king square
    if from != Square::new(row, CastleSide::KING_COL) {
        return;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !rights.may_castle(c, side) {
            continue;
        }
        let rook_sq = Square::new(row, side.rook_col());
        if board.piece_at(rook_sq) != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }
        if !side
            .between_cols()
            .iter()
            .all(|&col| board.is_empty(Square::new(row, col)))
        {
            continue;
        }
        // Can't castle out of, through, or into check.
        if side
            .king_path_cols()
            .iter()
            .any(|&col| is_square_attacked(board, Square::new(row, col), c))
        {
            continue;
        }
        out.push(Square::new(row, side.king_target_col()));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
