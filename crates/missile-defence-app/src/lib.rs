//! Headless runner for the missile defence simulation.
//!
//! Hosts the engine on a fixed-rate game loop thread or runs it in batch mode,
//! with an optional scripted autopilot standing in for the player.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use missile_defence_core as core;
