use crate::apply::play;
use crate::legality::all_legal_moves;
use crate::state::{GameState, LastMove};
use crate::types::PieceKind;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// Promotions are played as queens only, so counts agree with published
/// tables only while no pawn can promote within `depth` plies.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        let mut child = GameState {
            board: state.board.clone(),
            side_to_move: state.side_to_move.other(),
            castling: state.castling,
            last_move: None,
            history: Vec::new(),
        };
        if let Some(mv) = play(&mut child.board, &mut child.castling, from, to, PieceKind::Queen) {
            child.last_move = Some(LastMove {
                piece: mv.piece,
                from,
                to,
            });
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}
