use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use missile_defence_app::autopilot::Autopilot;
use missile_defence_app::game_loop::{self, TICK_DURATION};
use missile_defence_app::state::{AppState, GameLoopCommand};
use missile_defence_core::enums::Difficulty;
use missile_defence_core::state::GameStateSnapshot;
use missile_defence_sim::{SimConfig, SimulationEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Normal,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Headless missile defence simulation", long_about = None)]
struct Args {
    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Difficulty (overrides the config file)
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run in batch mode
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Run the 60Hz game loop thread for this many seconds instead of batch mode
    #[arg(long)]
    realtime: Option<f64>,

    /// Let a scripted player fire missiles and buy turrets
    #[arg(long, default_value_t = false)]
    autopilot: bool,

    /// Print the final snapshot as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty.into();
    }
    Ok(config)
}

fn run_realtime(config: SimConfig, secs: f64, autopilot: Option<Autopilot>) -> Result<GameStateSnapshot> {
    let duration = Duration::try_from_secs_f64(secs).context("invalid --realtime duration")?;
    let state = AppState::new();
    let (tx, handle) = game_loop::spawn_game_loop(config, Arc::clone(&state.latest_snapshot))
        .context("spawning game loop thread")?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    let mut autopilot = autopilot;
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);
        if let (Some(pilot), Some(snapshot)) = (autopilot.as_mut(), state.snapshot()) {
            for command in pilot.decide(&snapshot) {
                state.send(GameLoopCommand::PlayerCommand(command));
            }
        }
    }

    state.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    state
        .snapshot()
        .context("game loop stopped before the first tick")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let autopilot = args
        .autopilot
        .then(|| Autopilot::new(config.arena(), config.max_player_missiles));
    info!(
        "seed {}, {:?}, {} lives",
        config.seed, config.difficulty, config.starting_lives
    );

    let snapshot = match args.realtime {
        Some(secs) => run_realtime(config, secs, autopilot)?,
        None => {
            let mut engine = SimulationEngine::new(config);
            let mut autopilot = autopilot;
            game_loop::run_batch(&mut engine, args.ticks, autopilot.as_mut())
        }
    };

    info!(
        "finished after {} ticks: {:?}, wave {}, score {}, lives {}, credits {}",
        snapshot.time.tick,
        snapshot.phase,
        snapshot.wave_number,
        snapshot.economy.score,
        snapshot.economy.lives,
        snapshot.economy.credits
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
