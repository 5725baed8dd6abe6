//! Simulation configuration.
//!
//! Every field has a default, so a JSON file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use missile_defence_core::components::SpriteCatalog;
use missile_defence_core::constants::*;
use missile_defence_core::enums::Difficulty;
use missile_defence_core::types::{Arena, Position};

/// Failure to load or validate a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Difficulty at game start. Can be changed later with a command.
    pub difficulty: Difficulty,
    pub starting_lives: u32,
    /// Enemy count of the zeroth wave.
    pub initial_enemies: u32,
    /// Player projectiles allowed in flight at once.
    pub max_player_missiles: usize,
    pub time_between_waves_secs: f64,
    pub sprites: SpriteCatalog,
    /// Top-left corners of the turret slots.
    pub turret_slots: Vec<Position>,
    pub turret_price: u32,
    pub turret_range: f64,
    pub turret_fire_rate_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            difficulty: Difficulty::default(),
            starting_lives: STARTING_LIVES,
            initial_enemies: INITIAL_ENEMIES,
            max_player_missiles: MAX_PLAYER_MISSILES,
            time_between_waves_secs: TIME_BETWEEN_WAVES_SECS,
            sprites: SpriteCatalog::default(),
            turret_slots: TURRET_SLOTS
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
            turret_price: TURRET_PRICE,
            turret_range: TURRET_RANGE,
            turret_fire_rate_frames: TURRET_FIRE_RATE_FRAMES,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.screen_width, self.screen_height)
    }

    /// Inter-wave pause in ticks.
    pub fn countdown_ticks(&self) -> u32 {
        (self.time_between_waves_secs * TICK_RATE as f64).round() as u32
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "screen must have positive size, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.turret_fire_rate_frames == 0 {
            return Err(ConfigError::Invalid(
                "turret_fire_rate_frames must be at least 1".into(),
            ));
        }
        if self.time_between_waves_secs.is_nan() || self.time_between_waves_secs < 0.0 {
            return Err(ConfigError::Invalid(
                "time_between_waves_secs must not be negative".into(),
            ));
        }
        let sprites = [
            ("hostile", self.sprites.hostile),
            ("projectile", self.sprites.projectile),
            ("turret", self.sprites.turret),
        ];
        for (name, hitbox) in sprites {
            if hitbox.width <= 0.0
                || hitbox.height <= 0.0
                || hitbox.width > self.screen_width
                || hitbox.height > self.screen_height
            {
                return Err(ConfigError::Invalid(format!(
                    "{name} sprite {}x{} does not fit the screen",
                    hitbox.width, hitbox.height
                )));
            }
        }
        Ok(())
    }
}
