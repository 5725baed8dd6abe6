//! Errors returned by engine operations.

use thiserror::Error;

use missile_defence_core::error::GeometryError;
use missile_defence_core::types::Position;

/// Reasons a player action was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("no turret slot {0}")]
    InvalidTurretSlot(usize),
    #[error("no turret slot at ({}, {})", .0.x, .0.y)]
    NoTurretSlotAt(Position),
    #[error("turret slot {0} is already placed")]
    TurretAlreadyPlaced(usize),
    #[error("not enough credits: have {have}, need {need}")]
    InsufficientCredits { have: u32, need: u32 },
    #[error("game is not running")]
    NotRunning,
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
