//! Attack detection.
//!
//! Answers "could the opponent capture on this square right now" by running
//! every opposing piece through the move generator in its non-castling mode.

use crate::board::Board;
use crate::movegen::{pawn_capture_squares, pseudo_legal_moves_into};
use crate::state::CastlingRights;
use crate::types::*;

/// Whether any piece of `defending`'s opponent attacks `square`.
///
/// Pawns are judged by their diagonal capture squares only: a push is never
/// an attack, and a diagonal on an empty square (a castling transit square,
/// say) still counts as covered.
pub fn is_square_attacked(board: &Board, square: Square, defending: Color) -> bool {
    let attacker = defending.other();
    // Castling is skipped, so these rights are never read.
    let rights = CastlingRights::default();
    let mut targets = Vec::with_capacity(28);

    for (from, pc) in board.pieces_of(attacker) {
        let hit = if pc.kind == PieceKind::Pawn {
            pawn_capture_squares(from, attacker).any(|to| to == square)
        } else {
            targets.clear();
            pseudo_legal_moves_into(board, pc, from, &rights, None, false, &mut targets);
            targets.contains(&square)
        };
        if hit {
            return true;
        }
    }
    false
}

/// Whether `c`'s king is attacked. `None` when that king is missing.
pub fn king_in_check(board: &Board, c: Color) -> Option<bool> {
    board
        .king_square(c)
        .map(|ksq| is_square_attacked(board, ksq, c))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
