//! A single game: commit a move, then classify the new position.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::Rules;
use crate::error::RulesError;
use crate::state::GameState;
use crate::types::*;

/// What one committed move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub mv: Move,
    /// Status of the position after the move, for the new side to move.
    pub status: Status,
}

/// A game state paired with the rules that judge it and its current status.
///
/// Once the status is checkmate or stalemate no further move is accepted.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    state: GameState,
    status: Status,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard start with default rules.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Game {
            rules,
            state: GameState::new(),
            status: Status::Active,
        }
    }

    /// Resume from an existing state. Fails if the state is missing a king.
    pub fn from_state(rules: Rules, state: GameState) -> Result<Self, RulesError> {
        let status = rules.evaluate(&state)?;
        Ok(Game {
            rules,
            state,
            status,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// The side currently in check, if any.
    pub fn checked_side(&self) -> Option<Color> {
        matches!(self.status, Status::Check | Status::Checkmate)
            .then_some(self.state.side_to_move)
    }

    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.rules.legal_moves(&self.state, from)
    }

    /// Validate, apply and classify one move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, RulesError> {
        self.play_inner(from, to, None)
    }

    pub fn play_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<MoveOutcome, RulesError> {
        self.play_inner(from, to, Some(promotion))
    }

    fn play_inner(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, RulesError> {
        if self.status.is_terminal() {
            return Err(RulesError::GameOver(self.status));
        }
        let mv = match promotion {
            Some(kind) => self
                .rules
                .apply_with_promotion(&mut self.state, from, to, kind)?,
            None => self.rules.apply(&mut self.state, from, to)?,
        };
        let status = self.rules.evaluate(&self.state)?;
        if status != self.status {
            debug!(
                from = %self.status,
                to = %status,
                side = %self.state.side_to_move,
                "status changed"
            );
        }
        self.status = status;
        Ok(MoveOutcome { mv, status })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
