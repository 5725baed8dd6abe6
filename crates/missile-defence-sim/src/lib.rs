//! Simulation engine for the missile defence game.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for rendering collaborators.

pub mod config;
pub mod economy;
pub mod engine;
pub mod error;
pub mod reticle;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use error::SimError;
pub use missile_defence_core as core;
