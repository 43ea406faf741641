//! Legal move filtering and the move validation gate.

use tracing::trace;

use crate::apply::play;
use crate::attacks::king_in_check;
use crate::error::RulesError;
use crate::movegen::pseudo_legal_moves;
use crate::state::GameState;
use crate::types::*;

/// Legal destinations for the piece on `from`.
///
/// Each pseudo-legal target is tried on a private copy of the board and
/// castling rights; targets that leave the mover's king attacked (or, for a
/// malformed position, leave it missing) are dropped. Empty if `from` is
/// off the board or unoccupied.
pub fn legal_moves(state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = state.board.piece_at(from) else {
        return Vec::new();
    };

    let mut targets = pseudo_legal_moves(
        &state.board,
        piece,
        from,
        &state.castling,
        state.last_move.as_ref(),
        true,
    );
    targets.retain(|&to| {
        let mut board = state.board.clone();
        let mut rights = state.castling;
        if play(&mut board, &mut rights, from, to, PieceKind::Queen).is_none() {
            return false;
        }
        king_in_check(&board, piece.color) == Some(false)
    });
    targets
}

/// Every legal `(from, to)` pair for the side to move.
pub fn all_legal_moves(state: &GameState) -> Vec<(Square, Square)> {
    state
        .board
        .pieces_of(state.side_to_move)
        .flat_map(|(from, _)| {
            legal_moves(state, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(state: &GameState) -> bool {
    state
        .board
        .pieces_of(state.side_to_move)
        .any(|(from, _)| !legal_moves(state, from).is_empty())
}

/// The legality gate, reporting why a move is rejected.
pub fn check_move(state: &GameState, from: Square, to: Square) -> Result<(), RulesError> {
    let result = gate(state, from, to);
    if let Err(err) = &result {
        trace!(%from, %to, %err, "move rejected");
    }
    result
}

fn gate(state: &GameState, from: Square, to: Square) -> Result<(), RulesError> {
    if !from.is_on_board() {
        return Err(RulesError::OutOfBounds(from));
    }
    if !to.is_on_board() {
        return Err(RulesError::OutOfBounds(to));
    }
    let piece = state
        .board
        .piece_at(from)
        .ok_or(RulesError::EmptySquare(from))?;
    if piece.color != state.side_to_move {
        return Err(RulesError::WrongSide {
            square: from,
            expected: state.side_to_move,
        });
    }
    if !legal_moves(state, from).contains(&to) {
        return Err(RulesError::IllegalMove { from, to });
    }
    Ok(())
}

/// Fail-closed legality check: `true` only for a legal move by the side to
/// move. This is the single authority callers should consult.
pub fn validate_move(state: &GameState, from: Square, to: Square) -> bool {
    check_move(state, from, to).is_ok()
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
