use std::time::Duration;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::definitions::Color;

/// Which side the human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideChoice {
    White,
    Black,
    Random,
}

impl SideChoice {
    pub fn parse(value: &str) -> Option<SideChoice> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" => Some(SideChoice::White),
            "black" => Some(SideChoice::Black),
            "random" => Some(SideChoice::Random),
            _ => None,
        }
    }
}

/// Game settings parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// `CHESS_PLAYER_SIDE`: white, black or random.
    pub player_side: SideChoice,
    /// `CHESS_OPPONENT_DELAY_MS`: pause before the opponent moves.
    pub opponent_delay_ms: u64,
    /// `CHESS_SEED`: fixes the opponent's random source.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_side: SideChoice::Random,
            opponent_delay_ms: 500,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        GameConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] over any key-value source.
    /// Unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        let player_side = match lookup("CHESS_PLAYER_SIDE") {
            Some(value) => SideChoice::parse(&value).unwrap_or_else(|| {
                warn!("Unknown CHESS_PLAYER_SIDE {value:?}, using {:?}", defaults.player_side);
                defaults.player_side
            }),
            None => defaults.player_side,
        };
        GameConfig {
            player_side,
            opponent_delay_ms: parse_or(&lookup, "CHESS_OPPONENT_DELAY_MS", defaults.opponent_delay_ms),
            seed: lookup("CHESS_SEED").and_then(|value| match value.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("Ignoring CHESS_SEED {value:?}");
                    None
                }
            }),
        }
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Settles a random side choice with a coin flip.
    pub fn resolve_side<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        match self.player_side {
            SideChoice::White => Color::White,
            SideChoice::Black => Color::Black,
            SideChoice::Random => {
                if rng.gen_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }
}

fn parse_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {key} {value:?}, using {default}");
            default
        }),
        None => default,
    }
}
