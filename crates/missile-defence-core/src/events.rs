//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Emitter;
use crate::types::Position;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave was created.
    WaveStarted { wave_number: u32, enemy_count: u32 },
    /// The active wave finished and its hostiles were removed.
    WaveCleared { wave_number: u32 },
    /// A projectile hit a hostile.
    HostileDestroyed {
        entity: u64,
        position: Position,
        score_value: u32,
    },
    /// A hostile reached the ground; a life was lost.
    GroundImpact { position: Position, lives_left: u32 },
    /// A projectile was launched.
    MissileFired { emitter: Emitter, target: Position },
    /// Lives ran out.
    GameOver { final_score: u64, waves_reached: u32 },
}
