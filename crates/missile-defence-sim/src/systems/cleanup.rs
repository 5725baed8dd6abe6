//! Cleanup system: removes spent projectiles and the hostiles of cleared waves.

use hecs::{Entity, World};

use missile_defence_core::components::Projectile;

use crate::wave::Wave;

/// Despawn every invisible projectile.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.visible {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Despawn every hostile a wave ever spawned.
pub fn despawn_wave(world: &mut World, wave: &Wave) {
    for &entity in wave.hostiles() {
        let _ = world.despawn(entity);
    }
}
