//! Wave data model: a timed batch of hostiles.
//!
//! Stored in the `WaveSchedule`, NOT as an ECS entity. The wave owns its hostiles
//! through the entity handles in `hostiles`.

use hecs::{Entity, World};
use log::{debug, trace};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use missile_defence_core::components::{Hostile, SpriteCatalog};
use missile_defence_core::events::GameEvent;
use missile_defence_core::types::{Arena, Position, Velocity};

use crate::economy::Economy;
use crate::systems::movement::advance_hostile;
use crate::world_setup::{ground_level, spawn_hostile};

/// One wave of hostiles, spawned at random ticks across its spawn window.
#[derive(Debug, Clone)]
pub struct Wave {
    wave_index: u32,
    enemy_count: u32,
    spawn_period_frames: f64,
    /// One entry per hostile; duplicates spawn together.
    spawn_ticks: Vec<u64>,
    frames_elapsed: u64,
    /// Every hostile spawned so far, in spawn order.
    hostiles: Vec<Entity>,
    finished: bool,
}

impl Wave {
    /// Roll the spawn schedule for a new wave. Nothing is spawned yet.
    pub fn create(
        enemy_count: u32,
        spawn_period_frames: f64,
        wave_index: u32,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let spawn_ticks = (0..enemy_count)
            .map(|_| (rng.gen::<f64>() * spawn_period_frames).round() as u64)
            .collect();
        Self {
            wave_index,
            enemy_count,
            spawn_period_frames,
            spawn_ticks,
            frames_elapsed: 0,
            hostiles: Vec::with_capacity(enemy_count as usize),
            finished: false,
        }
    }

    /// Advance the wave one tick: spawn due hostiles, move all of them, and
    /// re-derive `finished`.
    ///
    /// A hostile reaching the ground costs a life and emits `GroundImpact`.
    pub fn tick(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        arena: &Arena,
        sprites: &SpriteCatalog,
        economy: &mut Economy,
        events: &mut Vec<GameEvent>,
    ) {
        let due = self
            .spawn_ticks
            .iter()
            .filter(|&&tick| tick == self.frames_elapsed)
            .count();
        for _ in 0..due {
            let entity = spawn_hostile(world, rng, arena, sprites);
            trace!("wave {} spawned hostile {:?}", self.wave_number(), entity);
            self.hostiles.push(entity);
        }

        let ground_y = ground_level(arena, sprites);
        let mut any_live = false;
        for &entity in &self.hostiles {
            let Ok((pos, vel, hostile)) =
                world.query_one_mut::<(&mut Position, &mut Velocity, &mut Hostile)>(entity)
            else {
                continue;
            };
            let step = advance_hostile(pos, vel, hostile, ground_y);
            any_live |= step.live;
            if step.hit_ground {
                economy.decrement_lives();
                debug!(
                    "hostile reached ground at ({:.0}, {:.0}), {} lives left",
                    pos.x, pos.y, economy.lives
                );
                events.push(GameEvent::GroundImpact {
                    position: *pos,
                    lives_left: economy.lives,
                });
            }
        }

        // An empty wave has nothing left to spawn, so it finishes on its first tick.
        self.finished = self.spawned_count() == self.enemy_count && !any_live;
        self.frames_elapsed += 1;
    }

    /// Display number (1-based).
    pub fn wave_number(&self) -> u32 {
        self.wave_index + 1
    }

    pub fn wave_index(&self) -> u32 {
        self.wave_index
    }

    pub fn enemy_count(&self) -> u32 {
        self.enemy_count
    }

    pub fn spawn_period_frames(&self) -> f64 {
        self.spawn_period_frames
    }

    pub fn spawn_ticks(&self) -> &[u64] {
        &self.spawn_ticks
    }

    pub fn frames_elapsed(&self) -> u64 {
        self.frames_elapsed
    }

    pub fn hostiles(&self) -> &[Entity] {
        &self.hostiles
    }

    pub fn spawned_count(&self) -> u32 {
        self.hostiles.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
impl Wave {
    /// Hand an externally spawned hostile to this wave.
    pub(crate) fn adopt_hostile(&mut self, entity: Entity) {
        self.hostiles.push(entity);
    }
}
