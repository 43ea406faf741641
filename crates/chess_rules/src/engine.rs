//! The functional surface handed to the session layer.

use crate::apply::apply_with_promotion;
use crate::config::{ConfigError, EngineConfig};
use crate::error::RulesError;
use crate::legality;
use crate::state::GameState;
use crate::status;
use crate::types::*;

/// Rule queries bound to an [`EngineConfig`].
///
/// Holds no game data: every call takes the caller's [`GameState`].
#[derive(Debug, Clone, Default)]
pub struct Rules {
    config: EngineConfig,
}

impl Rules {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Legal destinations for the piece on `from`.
    pub fn legal_moves(&self, state: &GameState, from: Square) -> Vec<Square> {
        legality::legal_moves(state, from)
    }

    pub fn validate_move(&self, state: &GameState, from: Square, to: Square) -> bool {
        legality::validate_move(state, from, to)
    }

    /// Commit a move, promoting to the configured default piece.
    pub fn apply(
        &self,
        state: &mut GameState,
        from: Square,
        to: Square,
    ) -> Result<Move, RulesError> {
        apply_with_promotion(state, from, to, self.config.default_promotion)
    }

    pub fn apply_with_promotion(
        &self,
        state: &mut GameState,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<Move, RulesError> {
        apply_with_promotion(state, from, to, promotion)
    }

    pub fn evaluate(&self, state: &GameState) -> Result<Status, RulesError> {
        status::evaluate(state)
    }
}
