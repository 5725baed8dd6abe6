//! Player aiming reticle.

use missile_defence_core::enums::Direction;
use missile_defence_core::types::{Arena, Position};

/// Crosshair the player fires towards. Moves while a direction is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Reticle {
    pub position: Position,
    pub speed: f64,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Reticle {
    /// A stationary reticle in the middle of the arena.
    pub fn new(arena: &Arena, speed: f64) -> Self {
        Self {
            position: arena.center(),
            speed,
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }

    /// Start (`enable = true`) or stop moving in `direction`.
    pub fn set_direction(&mut self, direction: Direction, enable: bool) {
        match direction {
            Direction::Up => self.up = enable,
            Direction::Down => self.down = enable,
            Direction::Left => self.left = enable,
            Direction::Right => self.right = enable,
        }
    }

    /// Move one tick in every held direction, then clamp to
    /// `x ∈ [0, width]`, `y ∈ [0, height - speed]`.
    pub fn update(&mut self, arena: &Arena) {
        if self.up {
            self.position.y -= self.speed;
        }
        if self.down {
            self.position.y += self.speed;
        }
        if self.left {
            self.position.x -= self.speed;
        }
        if self.right {
            self.position.x += self.speed;
        }
        self.position.x = self.position.x.clamp(0.0, arena.width);
        self.position.y = self.position.y.clamp(0.0, (arena.height - self.speed).max(0.0));
    }
}
