//! Chess rules core.
//!
//! Given a [`GameState`] this crate answers which moves are legal, commits a
//! chosen move, and classifies the resulting position as active, check,
//! checkmate or stalemate. It holds no state of its own between calls.

pub mod apply;
pub mod attacks;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod perft;
pub mod state;
pub mod status;
pub mod types;

pub use apply::{apply, apply_with_promotion};
pub use attacks::{is_square_attacked, king_in_check};
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::Rules;
pub use error::RulesError;
pub use game::{Game, MoveOutcome};
pub use legality::{all_legal_moves, check_move, has_legal_move, legal_moves, validate_move};
pub use movegen::{pseudo_legal_moves, pseudo_legal_moves_into};
pub use perft::perft;
pub use state::{CastleSide, CastlingRights, GameState, LastMove};
pub use status::evaluate;
pub use types::*;
