use tracing::warn;

use crate::attacks::is_square_attacked;
use crate::error::RulesError;
use crate::legality::has_legal_move;
use crate::state::GameState;
use crate::types::Status;

/// Classify the position for the side to move.
///
/// A missing king of either color is reported as
/// [`RulesError::CorruptState`], never as a status: it cannot arise from
/// legal play.
pub fn evaluate(state: &GameState) -> Result<Status, RulesError> {
    let side = state.side_to_move;
    let Some(king) = state.board.king_square(side) else {
        warn!(%side, "no king for the side to move");
        return Err(RulesError::CorruptState(side));
    };
    let opponent = side.other();
    if state.board.king_square(opponent).is_none() {
        warn!(side = %opponent, "no king for the side not to move");
        return Err(RulesError::CorruptState(opponent));
    }

    let in_check = is_square_attacked(&state.board, king, side);
    let status = match (has_legal_move(state), in_check) {
        (false, true) => Status::Checkmate,
        (false, false) => Status::Stalemate,
        (true, true) => Status::Check,
        (true, false) => Status::Active,
    };
    Ok(status)
}
