//! Scripted player used by the headless runner.
//!
//! Reads the latest snapshot and answers with the commands a simple player would send:
//! shoot at the hostile closest to the ground, and buy turrets whenever affordable.

use missile_defence_core::commands::PlayerCommand;
use missile_defence_core::constants::PLAYER_MISSILE_SPEED;
use missile_defence_core::enums::{Emitter, GamePhase};
use missile_defence_core::state::{GameStateSnapshot, HostileView};
use missile_defence_core::types::{Arena, Position};

/// Minimum ticks between two shots.
const FIRE_INTERVAL_TICKS: u64 = 6;

/// Lead refinement passes when predicting where a hostile will be.
const LEAD_ITERATIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct Autopilot {
    launch_site: Position,
    max_missiles: usize,
    last_fire_tick: Option<u64>,
}

impl Autopilot {
    pub fn new(arena: Arena, max_missiles: usize) -> Self {
        Self {
            launch_site: arena.launch_site(),
            max_missiles,
            last_fire_tick: None,
        }
    }

    /// Commands to queue in response to `snapshot`.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if snapshot.phase != GamePhase::Active {
            return commands;
        }

        if let Some(slot) = snapshot
            .turrets
            .iter()
            .find(|t| !t.placed && t.price <= snapshot.economy.credits)
            .map(|t| t.slot)
        {
            commands.push(PlayerCommand::PlaceTurret { slot });
        }

        let in_flight = snapshot
            .projectiles
            .iter()
            .filter(|p| p.emitter == Emitter::Player)
            .count();
        let cooled_down = self
            .last_fire_tick
            .map_or(true, |tick| snapshot.time.tick >= tick + FIRE_INTERVAL_TICKS);
        if in_flight < self.max_missiles && cooled_down {
            if let Some(target) = lowest_hostile(&snapshot.hostiles) {
                commands.push(PlayerCommand::FireAt {
                    target: self.lead(target),
                });
                self.last_fire_tick = Some(snapshot.time.tick);
            }
        }
        commands
    }

    /// Where the hostile will be when a missile fired now reaches it.
    fn lead(&self, hostile: &HostileView) -> Position {
        let mut aim = hostile.position;
        for _ in 0..LEAD_ITERATIONS {
            let flight_ticks = self.launch_site.distance_to(&aim) / PLAYER_MISSILE_SPEED;
            aim = Position::new(
                hostile.position.x + hostile.velocity.x * flight_ticks,
                hostile.position.y + hostile.velocity.y * flight_ticks,
            );
        }
        aim
    }
}

/// The visible hostile closest to the ground.
fn lowest_hostile(hostiles: &[HostileView]) -> Option<&HostileView> {
    hostiles
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
}
