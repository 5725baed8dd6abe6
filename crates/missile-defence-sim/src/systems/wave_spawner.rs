//! Wave cycle: creates waves after the inter-wave countdown and clears them
//! once finished.

use hecs::World;
use log::info;
use rand_chacha::ChaCha8Rng;

use missile_defence_core::constants::TICK_RATE;
use missile_defence_core::difficulty::{enemies_for_difficulty, spawn_period_frames};
use missile_defence_core::enums::{Difficulty, RoundState};
use missile_defence_core::events::GameEvent;

use crate::systems::cleanup;
use crate::wave::Wave;

/// Tracks the active wave and the countdown to the next one.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    active: Option<Wave>,
    /// Index the next created wave will get.
    next_wave_index: u32,
    ticks_to_next_wave: u32,
    /// Set while a countdown has been started for the wave just cleared.
    counting_down: bool,
}

impl WaveSchedule {
    /// Tick the countdown and create the next wave once it has run out.
    ///
    /// Returns `true` when a wave was created. Difficulty is read here only, so a
    /// change takes effect from the next wave.
    pub fn create_new_wave_if_required(
        &mut self,
        rng: &mut ChaCha8Rng,
        initial_enemies: u32,
        difficulty: Difficulty,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if self.ticks_to_next_wave > 0 {
            self.ticks_to_next_wave -= 1;
        } else {
            self.counting_down = false;
        }

        if self.active.is_some() || self.ticks_to_next_wave > 0 {
            return false;
        }

        let wave_index = self.next_wave_index;
        let enemy_count = enemies_for_difficulty(initial_enemies, wave_index, difficulty);
        let wave = Wave::create(
            enemy_count,
            spawn_period_frames(wave_index, TICK_RATE),
            wave_index,
            rng,
        );
        info!(
            "wave {} started: {} hostiles over {:.0} ticks ({:?})",
            wave.wave_number(),
            enemy_count,
            wave.spawn_period_frames(),
            difficulty
        );
        events.push(GameEvent::WaveStarted {
            wave_number: wave.wave_number(),
            enemy_count,
        });
        self.active = Some(wave);
        self.next_wave_index += 1;
        self.counting_down = false;
        true
    }

    /// Clear a finished wave (despawning its hostiles) and start the countdown.
    ///
    /// With no active wave the countdown is started once and left running.
    pub fn check_if_wave_finished(
        &mut self,
        world: &mut World,
        countdown_ticks: u32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.active.as_ref().is_some_and(|wave| !wave.is_finished()) {
            return;
        }
        if let Some(wave) = self.active.take() {
            cleanup::despawn_wave(world, &wave);
            info!("wave {} cleared", wave.wave_number());
            events.push(GameEvent::WaveCleared {
                wave_number: wave.wave_number(),
            });
        }
        if !self.counting_down {
            self.ticks_to_next_wave = countdown_ticks;
            self.counting_down = true;
        }
    }

    pub fn active(&self) -> Option<&Wave> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Wave> {
        self.active.as_mut()
    }

    pub fn round_state(&self) -> RoundState {
        match self.active {
            Some(_) => RoundState::WaveActive,
            None => RoundState::Countdown {
                ticks_remaining: self.ticks_to_next_wave,
            },
        }
    }

    /// Display number of the active wave, or of the last one while counting down.
    pub fn wave_number(&self) -> u32 {
        match &self.active {
            Some(wave) => wave.wave_number(),
            None => self.next_wave_index,
        }
    }

    /// Number of waves created so far.
    pub fn waves_started(&self) -> u32 {
        self.next_wave_index
    }
}
