//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Emitter;
use crate::types::{Position, Rect};

/// Sprite rectangle size. Combined with the entity's `Position` (top-left corner)
/// this gives the collision rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Collision rectangle for an entity whose top-left corner is at `pos`.
    pub fn rect_at(&self, pos: &Position) -> Rect {
        Rect::new(pos.x, pos.y, self.width, self.height)
    }
}

/// Sprite dimensions supplied by the asset collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteCatalog {
    pub hostile: Hitbox,
    pub projectile: Hitbox,
    pub turret: Hitbox,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self {
            hostile: Hitbox::new(HOSTILE_WIDTH, HOSTILE_HEIGHT),
            projectile: Hitbox::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            turret: Hitbox::new(TURRET_WIDTH, TURRET_HEIGHT),
        }
    }
}

/// A descending enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    /// Where it entered the screen (top edge).
    pub spawn: Position,
    /// Point on the ground it is heading for.
    pub aim: Position,
    pub visible: bool,
    /// Set once the hostile is at ground level; it no longer moves afterwards.
    pub reached_ground: bool,
    pub score_value: u32,
    pub credit_value: u32,
    /// Sprite rotation (degrees).
    pub heading_deg: f64,
}

/// A straight-line missile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub emitter: Emitter,
    pub launch: Position,
    /// Captured at fire time; never re-aimed.
    pub target: Position,
    pub visible: bool,
    /// Sprite rotation (degrees).
    pub heading_deg: f64,
}

/// An autonomous defender bound to a fixed slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    pub slot: usize,
    pub placed: bool,
    pub range: f64,
    pub fire_rate_frames: u32,
    /// Wrapping counter; the turret may only fire when it is 0.
    pub frames_since_last_fire: u32,
    pub price: u32,
}
