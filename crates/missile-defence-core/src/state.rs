//! Game state snapshot: the complete visible state handed to rendering collaborators each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub round: RoundState,
    pub difficulty: Difficulty,
    /// Display number of the active (or last) wave; 0 before the first wave.
    pub wave_number: u32,
    pub reticle: Position,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub turrets: Vec<TurretView>,
    pub economy: EconomyView,
    pub events: Vec<GameEvent>,
}

/// A visible hostile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostileView {
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
    pub heading_deg: f64,
}

/// A visible projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
    pub heading_deg: f64,
    pub emitter: Emitter,
}

/// A turret slot, placed or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretView {
    pub slot: usize,
    pub position: Position,
    pub placed: bool,
    pub range: f64,
    pub price: u32,
}

/// Score, credits and lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomyView {
    pub score: u64,
    pub credits: u32,
    pub lives: u32,
}
