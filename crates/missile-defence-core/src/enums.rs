//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Difficulty setting. Scales how fast wave sizes grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Multiplier applied to the squared wave index when sizing a wave.
    pub fn enemy_constant(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 0.8,
            Difficulty::Hard => 1.3,
        }
    }
}

/// Who fired a projectile. Doubles as the projectile's owning list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emitter {
    Player,
    /// Turret in the given slot.
    Turret(usize),
}

/// Reticle movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}

/// Where the wave cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Between waves, waiting for the next one to be created.
    Countdown { ticks_remaining: u32 },
    /// A wave is in progress.
    WaveActive,
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState::Countdown { ticks_remaining: 0 }
    }
}
