//! Turret system: each placed turret shoots at the nearest hostile in range.

use hecs::World;
use log::debug;

use missile_defence_core::components::{Hostile, SpriteCatalog, Turret};
use missile_defence_core::constants::TURRET_MISSILE_SPEED;
use missile_defence_core::enums::Emitter;
use missile_defence_core::events::GameEvent;
use missile_defence_core::geometry::distance;
use missile_defence_core::types::Position;

use crate::wave::Wave;
use crate::world_setup::fire_projectile;

/// Visible hostiles of the wave, in spawn order.
fn visible_targets(world: &World, wave: Option<&Wave>) -> Vec<Position> {
    let Some(wave) = wave else {
        return Vec::new();
    };
    wave.hostiles()
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&Position, &Hostile)>(entity).ok()?;
            let (pos, hostile) = query.get()?;
            hostile.visible.then_some(*pos)
        })
        .collect()
}

/// Let every placed turret pick a target and fire, at most once per tick each.
///
/// The nearest visible hostile is chosen; on equal distance the one spawned first wins.
/// A turret fires only when its counter is 0 and the target is within range. The
/// counter advances every tick the turret is placed.
pub fn run(
    world: &mut World,
    wave: Option<&Wave>,
    sprites: &SpriteCatalog,
    events: &mut Vec<GameEvent>,
) {
    let targets = visible_targets(world, wave);

    let mut shots = Vec::new();
    for (_entity, (turret, pos)) in world.query_mut::<(&mut Turret, &Position)>() {
        if !turret.placed {
            continue;
        }
        if turret.frames_since_last_fire == 0 {
            let nearest = targets
                .iter()
                .map(|target| (distance(pos, target), *target))
                .min_by(|a, b| a.0.total_cmp(&b.0));
            if let Some((dist, target)) = nearest {
                if dist <= turret.range {
                    shots.push((turret.slot, *pos, target));
                }
            }
        }
        turret.frames_since_last_fire =
            (turret.frames_since_last_fire + 1) % turret.fire_rate_frames.max(1);
    }
    shots.sort_by_key(|&(slot, _, _)| slot);

    for (slot, launch, target) in shots {
        let emitter = Emitter::Turret(slot);
        match fire_projectile(world, emitter, launch, target, TURRET_MISSILE_SPEED, sprites) {
            Ok(_) => events.push(GameEvent::MissileFired { emitter, target }),
            Err(err) => debug!("turret {slot} held fire: {err}"),
        }
    }
}
