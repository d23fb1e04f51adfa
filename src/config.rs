//! Game tuning and asset locations.
//! Loaded once at startup from the embedded `game.json`; invalid input falls
//! back to the built-in defaults.

use crate::assets::ALPHABET;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../game.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("balloons_per_round must be between 1 and {max}, got {got}")]
    BalloonCount { got: usize, max: usize },
    #[error("pops_to_win must be at least 1")]
    PopsToWin,
    #[error("field must have positive dimensions, got {width}x{height}")]
    Field { width: f64, height: f64 },
    #[error("music_volume must be within 0.0..=1.0, got {0}")]
    MusicVolume(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 400.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub pop_sound: String,
    pub inflate_sound: String,
    pub music: String,
    pub balloons_dir: String,
    pub letters_dir: String,
    pub pump_image: String,
    pub machine_image: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            pop_sound: "/assets/pop.mp3".into(),
            inflate_sound: "/assets/inflate.mp3".into(),
            music: "/assets/game_music.mp3".into(),
            balloons_dir: "/assets/balloons".into(),
            letters_dir: "/assets/letters".into(),
            pump_image: "/assets/machine.png".into(),
            machine_image: "/assets/pop.png".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Balloons generated per round; each carries a distinct letter.
    pub balloons_per_round: usize,
    /// Cumulative correct pops that end the game.
    pub pops_to_win: u32,
    /// Rectangle balloon positions are sampled from, in CSS pixels.
    pub field: Field,
    pub music_volume: f64,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            balloons_per_round: 10,
            pops_to_win: 10,
            field: Field::default(),
            music_volume: 0.4,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.balloons_per_round == 0 || self.balloons_per_round > ALPHABET.len() {
            return Err(ConfigError::BalloonCount {
                got: self.balloons_per_round,
                max: ALPHABET.len(),
            });
        }
        if self.pops_to_win == 0 {
            return Err(ConfigError::PopsToWin);
        }
        let Field { width, height } = self.field;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Field { width, height });
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::MusicVolume(self.music_volume));
        }
        Ok(())
    }

    /// Embedded config, or defaults if it is unusable.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{e}; using default game config");
                Self::default()
            }
        }
    }
}
