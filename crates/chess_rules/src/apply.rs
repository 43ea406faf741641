//! Committing a move to a game state.

use tracing::debug;

use crate::board::Board;
use crate::error::RulesError;
use crate::legality::check_move;
use crate::state::{CastleSide, CastlingRights, GameState, LastMove};
use crate::types::*;

/// Apply a move, promoting to a queen if a pawn reaches the last rank.
///
/// The move is re-validated first; an illegal move is reported and the
/// state is left untouched.
pub fn apply(state: &mut GameState, from: Square, to: Square) -> Result<Move, RulesError> {
    apply_with_promotion(state, from, to, PieceKind::Queen)
}

/// Like [`apply`], choosing what a promoting pawn becomes. `promotion` is
/// ignored for moves that do not promote.
pub fn apply_with_promotion(
    state: &mut GameState,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> Result<Move, RulesError> {
    if !promotion.is_promotable() {
        return Err(RulesError::InvalidPromotion(promotion));
    }
    check_move(state, from, to)?;

    let mv = play(&mut state.board, &mut state.castling, from, to, promotion)
        .ok_or(RulesError::EmptySquare(from))?;

    state.side_to_move = state.side_to_move.other();
    state.last_move = Some(LastMove {
        piece: mv.piece,
        from,
        to,
    });
    state.history.push(mv);

    debug!(
        color = %mv.color(),
        piece = %mv.piece.kind,
        %from,
        %to,
        captured = ?mv.captured.map(|p| p.kind),
        en_passant = mv.en_passant,
        castling = mv.castling,
        promotion = ?mv.promotion,
        "applied move"
    );
    Ok(mv)
}

/// Move the piece on `from` to `to`, carrying out en passant, the castling
/// rook jump and promotion, and updating `rights`.
///
/// No legality checks. Used both for committed moves and for the throwaway
/// copies the legality filter simulates on. Returns `None` if `from` is empty.
pub(crate) fn play(
    board: &mut Board,
    rights: &mut CastlingRights,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> Option<Move> {
    let moved = board.take(from)?;
    let mut mv = Move {
        from,
        to,
        piece: moved,
        captured: board.take(to),
        en_passant: false,
        castling: false,
        promotion: None,
    };

    match moved.kind {
        // Diagonal step onto an empty square: the captured pawn sits beside us
        PieceKind::Pawn if from.col != to.col && mv.captured.is_none() => {
            mv.captured = board.take(Square::new(from.row, to.col));
            mv.en_passant = true;
        }
        PieceKind::King if (to.col - from.col).abs() == 2 => {
            if let Some(side) = CastleSide::from_king_target(to.col) {
                let rook_from = Square::new(from.row, side.rook_col());
                let rook_to = Square::new(from.row, side.rook_target_col());
                let rook = board.take(rook_from);
                board.set_piece(rook_to, rook);
                mv.castling = true;
            }
        }
        _ => {}
    }

    let mut landed = moved;
    if moved.kind == PieceKind::Pawn && to.row == moved.color.promotion_row() {
        landed.kind = promotion;
        mv.promotion = Some(promotion);
    }
    board.set_piece(to, Some(landed));

    rights.note_departure(moved, from);
    if let Some(captured) = mv.captured {
        rights.note_capture(captured, to);
    }
    Some(mv)
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
