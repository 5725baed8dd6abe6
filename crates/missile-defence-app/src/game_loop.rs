//! Game loop: runs the simulation engine at 60Hz on its own thread, or in batch mode.
//!
//! The engine is created inside the loop thread so the thread owns it outright.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::debug;

use missile_defence_core::commands::PlayerCommand;
use missile_defence_core::constants::TICK_RATE;
use missile_defence_core::enums::GamePhase;
use missile_defence_core::state::GameStateSnapshot;
use missile_defence_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread. The game is started immediately.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("missile-defence-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config);
            engine.queue_command(PlayerCommand::StartGame);
            run_game_loop(&mut engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            debug!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

/// Run up to `ticks` ticks as fast as possible, stopping early on game over.
///
/// Returns the last snapshot.
pub fn run_batch(
    engine: &mut SimulationEngine,
    ticks: u64,
    mut autopilot: Option<&mut Autopilot>,
) -> GameStateSnapshot {
    engine.queue_command(PlayerCommand::StartGame);
    let mut snapshot = engine.tick();
    for _ in 1..ticks {
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        if let Some(pilot) = autopilot.as_deref_mut() {
            engine.queue_commands(pilot.decide(&snapshot));
        }
        snapshot = engine.tick();
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_game_loop_thread_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), Arc::clone(&latest)).unwrap();

        std::thread::sleep(TICK_DURATION * 10);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().expect("at least one tick ran");
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick >= 1);
    }

    #[test]
    fn test_batch_run_stops_at_tick_limit() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let snapshot = run_batch(&mut engine, 100, None);
        assert_eq!(snapshot.time.tick, 100);
        assert_eq!(snapshot.phase, GamePhase::Active);
    }

    #[test]
    fn test_batch_run_ends_at_game_over() {
        let mut engine = SimulationEngine::new(SimConfig {
            starting_lives: 1,
            ..Default::default()
        });
        let snapshot = run_batch(&mut engine, 100_000, None);
        assert_eq!(snapshot.phase, GamePhase::GameOver);
        assert!(snapshot.time.tick < 100_000);
    }

    #[test]
    fn test_autopilot_scores() {
        let config = SimConfig {
            starting_lives: 1_000,
            ..Default::default()
        };
        let mut pilot = Autopilot::new(config.arena(), config.max_player_missiles);
        let mut engine = SimulationEngine::new(config);
        let snapshot = run_batch(&mut engine, 3_000, Some(&mut pilot));
        assert!(snapshot.economy.score > 0, "autopilot never hit anything");
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
