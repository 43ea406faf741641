//! Replay a sequence of coordinate moves and print the status after each.
//!
//! Usage:
//!   RUST_LOG=chess_rules=debug cargo run --example replay -p chess_rules -- f2f3 e7e5 g2g4 d8h4
//!
//! Set `CHESS_RULES_CONFIG` to a TOML file to override the engine config.

use std::env;
use std::path::PathBuf;

use chess_rules::{EngineConfig, Game, Rules, Square};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn parse_move(text: &str) -> Option<(Square, Square)> {
    if text.len() != 4 {
        return None;
    }
    let from = text.get(0..2)?.parse().ok()?;
    let to = text.get(2..4)?.parse().ok()?;
    Some((from, to))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::var_os("CHESS_RULES_CONFIG").map(PathBuf::from) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path.display(), %err, "could not load config");
                return;
            }
        },
        None => EngineConfig::default(),
    };
    let rules = match Rules::new(config) {
        Ok(rules) => rules,
        Err(err) => {
            error!(%err, "invalid config");
            return;
        }
    };

    let mut game = Game::with_rules(rules);
    for text in env::args().skip(1) {
        let Some((from, to)) = parse_move(&text) else {
            error!(%text, "expected a move like e2e4");
            return;
        };
        match game.play(from, to) {
            Ok(outcome) => info!(mv = %text, status = %outcome.status, "played"),
            Err(err) => {
                error!(mv = %text, %err, "rejected");
                return;
            }
        }
    }
    println!("{}", game.status());
}
