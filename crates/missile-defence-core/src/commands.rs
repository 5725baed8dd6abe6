//! Player commands sent from input collaborators to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Combat ---
    /// Fire a missile from the launch site towards the reticle.
    Fire,
    /// Fire a missile from the launch site towards an explicit point.
    FireAt { target: Position },
    /// Start or stop moving the reticle in one direction.
    MoveReticle { direction: Direction, enable: bool },

    // --- Turrets ---
    /// Buy and place the turret in a slot.
    PlaceTurret { slot: usize },
    /// Buy and place the turret whose slot contains the given point.
    PlaceTurretAt { position: Position },

    // --- Game control ---
    /// Start a new game (from the main menu or after game over).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Change difficulty; applies from the next wave.
    SetDifficulty { difficulty: Difficulty },
}
