//! Engine configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("default_promotion must be knight, bishop, rook or queen, got {0}")]
    Promotion(PieceKind),
}

/// Tunable engine behaviour.
///
/// ```toml
/// default_promotion = "queen"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// What a pawn reaching the last rank becomes when the caller does not say.
    pub default_promotion: PieceKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_promotion: PieceKind::Queen,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_promotion.is_promotable() {
            Ok(())
        } else {
            Err(ConfigError::Promotion(self.default_promotion))
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
