//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use missile_defence_core::commands::PlayerCommand;
use missile_defence_core::components::Turret;
use missile_defence_core::constants::{PLAYER_MISSILE_SPEED, RETICLE_SPEED};
use missile_defence_core::enums::{Difficulty, Direction, Emitter, GamePhase, RoundState};
use missile_defence_core::events::GameEvent;
use missile_defence_core::state::GameStateSnapshot;
use missile_defence_core::types::{Arena, Position, SimTime};

use crate::config::SimConfig;
use crate::economy::Economy;
use crate::error::SimError;
use crate::reticle::Reticle;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    arena: Arena,
    time: SimTime,
    phase: GamePhase,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    wave_schedule: WaveSchedule,
    economy: Economy,
    reticle: Reticle,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// The game starts in the main menu; send `StartGame` to begin.
    pub fn new(config: SimConfig) -> Self {
        let arena = config.arena();
        Self {
            world: World::new(),
            arena,
            time: SimTime::default(),
            phase: GamePhase::default(),
            difficulty: config.difficulty,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave_schedule: WaveSchedule::default(),
            economy: Economy::new(config.starting_lives),
            reticle: Reticle::new(&arena, RETICLE_SPEED),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            if self.economy.is_out_of_lives() {
                self.enter_game_over();
            } else {
                self.run_systems();
                self.time.advance();
            }
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.difficulty,
            &self.wave_schedule,
            &self.reticle,
            &self.economy,
            events,
        )
    }

    /// Reset everything and begin a new game from wave 0.
    pub fn start_game(&mut self) {
        self.world.clear();
        world_setup::spawn_turret_slots(&mut self.world, &self.config);
        self.wave_schedule = WaveSchedule::default();
        self.economy = Economy::new(self.config.starting_lives);
        self.reticle = Reticle::new(&self.arena, RETICLE_SPEED);
        self.time = SimTime::default();
        self.events.clear();
        self.phase = GamePhase::Active;
        info!(
            "game started: {:?}, {} lives",
            self.difficulty, self.economy.lives
        );
    }

    /// Fire a player missile from `from` towards `to`.
    ///
    /// Returns `Ok(None)` when the missile cap is reached; the shot is dropped.
    pub fn fire_player_missile(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<Option<Entity>, SimError> {
        if self.phase != GamePhase::Active {
            return Err(SimError::NotRunning);
        }
        let in_flight = world_setup::count_projectiles(&self.world, Emitter::Player);
        if in_flight >= self.config.max_player_missiles {
            debug!("fire dropped: {in_flight} player missiles already in flight");
            return Ok(None);
        }
        let entity = world_setup::fire_projectile(
            &mut self.world,
            Emitter::Player,
            from,
            to,
            PLAYER_MISSILE_SPEED,
            &self.config.sprites,
        )?;
        self.events.push(GameEvent::MissileFired {
            emitter: Emitter::Player,
            target: to,
        });
        Ok(Some(entity))
    }

    /// Fire from the launch site towards `target`.
    pub fn fire_at(&mut self, target: Position) -> Result<Option<Entity>, SimError> {
        self.fire_player_missile(self.arena.launch_site(), target)
    }

    /// Fire from the launch site towards the reticle.
    pub fn fire_at_reticle(&mut self) -> Result<Option<Entity>, SimError> {
        self.fire_at(self.reticle.position)
    }

    /// Start or stop moving the reticle.
    pub fn move_reticle(&mut self, direction: Direction, enable: bool) {
        self.reticle.set_direction(direction, enable);
    }

    /// Buy and place the turret in `slot`.
    pub fn place_turret(&mut self, slot: usize) -> Result<(), SimError> {
        if self.phase != GamePhase::Active {
            return Err(SimError::NotRunning);
        }
        let query = self.world.query_mut::<&mut Turret>();
        let Some((_, turret)) = query.into_iter().find(|(_, turret)| turret.slot == slot) else {
            return Err(SimError::InvalidTurretSlot(slot));
        };
        if turret.placed {
            return Err(SimError::TurretAlreadyPlaced(slot));
        }
        self.economy.spend(turret.price)?;
        turret.placed = true;
        turret.frames_since_last_fire = 0;
        info!("turret placed in slot {slot}, {} credits left", self.economy.credits);
        Ok(())
    }

    /// Buy and place the turret whose slot rectangle contains `position`.
    /// Returns the slot that was placed.
    pub fn place_turret_at(&mut self, position: Position) -> Result<usize, SimError> {
        let hitbox = self.config.sprites.turret;
        let slot = self
            .config
            .turret_slots
            .iter()
            .position(|corner| hitbox.rect_at(corner).contains_point(&position))
            .ok_or(SimError::NoTurretSlotAt(position))?;
        self.place_turret(slot)?;
        Ok(slot)
    }

    /// Set the difficulty used when the next wave is created.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn round_state(&self) -> RoundState {
        self.wave_schedule.round_state()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    pub fn wave_schedule(&self) -> &WaveSchedule {
        &self.wave_schedule
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that place entities by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command) {
                debug!("command {command:?} rejected: {err}");
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: &PlayerCommand) -> Result<(), SimError> {
        match *command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Fire => {
                self.fire_at_reticle()?;
            }
            PlayerCommand::FireAt { target } => {
                self.fire_at(target)?;
            }
            PlayerCommand::MoveReticle { direction, enable } => {
                self.move_reticle(direction, enable);
            }
            PlayerCommand::PlaceTurret { slot } => {
                self.place_turret(slot)?;
            }
            PlayerCommand::PlaceTurretAt { position } => {
                self.place_turret_at(position)?;
            }
            PlayerCommand::SetDifficulty { difficulty } => {
                self.set_difficulty(difficulty);
            }
        }
        Ok(())
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let waves_reached = self.wave_schedule.waves_started();
        info!(
            "game over: score {}, reached wave {}",
            self.economy.score, waves_reached
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.economy.score,
            waves_reached,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let sprites = self.config.sprites;

        // 1. Wave creation after the countdown
        self.wave_schedule.create_new_wave_if_required(
            &mut self.rng,
            self.config.initial_enemies,
            self.difficulty,
            &mut self.events,
        );
        // 2. Cull spent projectiles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Collisions (score, credits, hide hostiles, remove projectiles)
        systems::collision::run(
            &mut self.world,
            self.wave_schedule.active(),
            &mut self.economy,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Wave completion and countdown
        self.wave_schedule.check_if_wave_finished(
            &mut self.world,
            self.config.countdown_ticks(),
            &mut self.events,
        );
        // 5. Turret targeting and fire
        systems::turret_fire::run(
            &mut self.world,
            self.wave_schedule.active(),
            &sprites,
            &mut self.events,
        );
        // 6. Wave tick (spawn, hostile motion, ground impacts)
        if let Some(wave) = self.wave_schedule.active_mut() {
            wave.tick(
                &mut self.world,
                &mut self.rng,
                &self.arena,
                &sprites,
                &mut self.economy,
                &mut self.events,
            );
        }
        // 7. Projectile motion
        systems::movement::run_projectiles(&mut self.world, &self.arena);
        // 8. Reticle
        self.reticle.update(&self.arena);
    }
}
