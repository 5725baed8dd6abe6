//! Entity spawn factories for setting up the simulation world.
//!
//! Creates hostile, projectile and turret entities with
//! the appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use missile_defence_core::components::*;
use missile_defence_core::constants::*;
use missile_defence_core::enums::Emitter;
use missile_defence_core::error::GeometryError;
use missile_defence_core::geometry::{angle_from_positions, vector_from_positions};
use missile_defence_core::types::{Arena, Position};

use crate::config::SimConfig;

/// Highest y a hostile's top-left corner may reach before it counts as grounded.
pub fn ground_level(arena: &Arena, sprites: &SpriteCatalog) -> f64 {
    arena.height - sprites.hostile.height
}

/// Spawn one hostile on the top edge, aimed at a random point on the ground.
///
/// Both x coordinates are whole pixels in `[0, width - hostile_width]`.
/// When spawn and aim coincide the hostile gets a zero velocity.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    sprites: &SpriteCatalog,
) -> Entity {
    let max_x = (arena.width - sprites.hostile.width).floor().max(0.0) as i64;
    let spawn = Position::new(rng.gen_range(0..=max_x) as f64, 0.0);
    let aim = Position::new(
        rng.gen_range(0..=max_x) as f64,
        ground_level(arena, sprites),
    );
    let velocity = vector_from_positions(&spawn, &aim, HOSTILE_SPEED).unwrap_or_default();

    world.spawn((
        Hostile {
            spawn,
            aim,
            visible: true,
            reached_ground: false,
            score_value: HOSTILE_SCORE_VALUE,
            credit_value: HOSTILE_CREDIT_VALUE,
            heading_deg: angle_from_positions(&spawn, &aim, HOSTILE_ANGLE_OFFSET),
        },
        spawn,
        velocity,
        sprites.hostile,
    ))
}

/// Launch a projectile from `launch` towards `target` at `speed` px/tick.
///
/// Fails without spawning anything when the two points coincide.
pub fn fire_projectile(
    world: &mut World,
    emitter: Emitter,
    launch: Position,
    target: Position,
    speed: f64,
    sprites: &SpriteCatalog,
) -> Result<Entity, GeometryError> {
    let velocity = vector_from_positions(&launch, &target, speed)?;
    Ok(world.spawn((
        Projectile {
            emitter,
            launch,
            target,
            visible: true,
            heading_deg: angle_from_positions(&launch, &target, PROJECTILE_ANGLE_OFFSET),
        },
        launch,
        velocity,
        sprites.projectile,
    )))
}

/// Spawn one unplaced turret per configured slot.
pub fn spawn_turret_slots(world: &mut World, config: &SimConfig) {
    for (slot, position) in config.turret_slots.iter().enumerate() {
        world.spawn((
            Turret {
                slot,
                placed: false,
                range: config.turret_range,
                fire_rate_frames: config.turret_fire_rate_frames,
                frames_since_last_fire: 0,
                price: config.turret_price,
            },
            *position,
            config.sprites.turret,
        ));
    }
}

/// Count projectiles in flight for an emitter.
pub fn count_projectiles(world: &World, emitter: Emitter) -> usize {
    world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, projectile)| projectile.emitter == emitter)
        .count()
}

