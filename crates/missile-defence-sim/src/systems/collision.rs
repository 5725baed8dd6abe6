//! Collision system: projectiles against the hostiles of the active wave.

use hecs::{Entity, World};
use log::trace;

use missile_defence_core::components::{Hitbox, Hostile, Projectile};
use missile_defence_core::enums::Emitter;
use missile_defence_core::events::GameEvent;
use missile_defence_core::types::Position;

use crate::economy::Economy;
use crate::wave::Wave;

/// Resolve hits for this tick.
///
/// Player projectiles are checked first, then turret projectiles by slot. A projectile
/// hits every visible hostile it overlaps and is then despawned. A hostile hidden
/// earlier in the pass cannot be hit again.
pub fn run(
    world: &mut World,
    wave: Option<&Wave>,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let Some(wave) = wave else {
        return;
    };

    let mut shots: Vec<_> = world
        .query::<(&Position, &Hitbox, &Projectile)>()
        .iter()
        .filter(|(_, (_, _, projectile))| projectile.visible)
        .map(|(entity, (pos, hitbox, projectile))| {
            (entity, projectile.emitter, hitbox.rect_at(pos))
        })
        .collect();
    shots.sort_by_key(|&(_, emitter, _)| match emitter {
        Emitter::Player => 0,
        Emitter::Turret(slot) => slot + 1,
    });

    for (shot, emitter, shot_rect) in shots {
        let mut hit = false;
        for &target in wave.hostiles() {
            let Ok((pos, hitbox, hostile)) =
                world.query_one_mut::<(&Position, &Hitbox, &mut Hostile)>(target)
            else {
                continue;
            };
            if !hostile.visible || !shot_rect.overlaps(&hitbox.rect_at(pos)) {
                continue;
            }
            hostile.visible = false;
            economy.increment_score(hostile.score_value);
            economy.increment_credits(hostile.credit_value);
            trace!("{:?} projectile hit hostile {:?}", emitter, target);
            events.push(GameEvent::HostileDestroyed {
                entity: target.to_bits().get(),
                position: *pos,
                score_value: hostile.score_value,
            });
            hit = true;
        }
        if hit {
            despawn_buffer.push(shot);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
