//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use missile_defence_core::components::*;
use missile_defence_core::enums::*;
use missile_defence_core::events::GameEvent;
use missile_defence_core::state::*;
use missile_defence_core::types::{Position, SimTime, Velocity};

use crate::economy::Economy;
use crate::reticle::Reticle;
use crate::systems::wave_spawner::WaveSchedule;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    difficulty: Difficulty,
    schedule: &WaveSchedule,
    reticle: &Reticle,
    economy: &Economy,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        round: schedule.round_state(),
        difficulty,
        wave_number: schedule.wave_number(),
        reticle: reticle.position,
        hostiles: build_hostiles(world, schedule),
        projectiles: build_projectiles(world),
        turrets: build_turrets(world),
        economy: economy.view(),
        events,
    }
}

/// Visible hostiles of the active wave, in spawn order.
fn build_hostiles(world: &World, schedule: &WaveSchedule) -> Vec<HostileView> {
    let Some(wave) = schedule.active() else {
        return Vec::new();
    };
    wave.hostiles()
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&Position, &Velocity, &Hostile)>(entity)
                .ok()?;
            let (pos, vel, hostile) = query.get()?;
            hostile.visible.then(|| HostileView {
                id: entity.to_bits().get(),
                position: *pos,
                velocity: *vel,
                heading_deg: hostile.heading_deg,
            })
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (_, projectile))| projectile.visible)
        .map(|(entity, (pos, projectile))| ProjectileView {
            id: entity.to_bits().get(),
            position: *pos,
            heading_deg: projectile.heading_deg,
            emitter: projectile.emitter,
        })
        .collect()
}

fn build_turrets(world: &World) -> Vec<TurretView> {
    let mut turrets: Vec<TurretView> = world
        .query::<(&Position, &Turret)>()
        .iter()
        .map(|(_, (pos, turret))| TurretView {
            slot: turret.slot,
            position: *pos,
            placed: turret.placed,
            range: turret.range,
            price: turret.price,
        })
        .collect();
    turrets.sort_by_key(|t| t.slot);
    turrets
}
