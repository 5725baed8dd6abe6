//! Simulation constants and tuning parameters.
//!
//! Speeds are in pixels per tick; there is no sub-tick integration.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen ---

/// Default screen width in pixels.
pub const SCREEN_WIDTH: f64 = 800.0;

/// Default screen height in pixels.
pub const SCREEN_HEIGHT: f64 = 600.0;

// --- Player ---

/// Maximum player missiles alive at once. Further fire requests are dropped.
pub const MAX_PLAYER_MISSILES: usize = 5;

/// Player missile speed (px/tick).
pub const PLAYER_MISSILE_SPEED: f64 = 7.0;

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 3;

/// Reticle speed while a direction is held (px/tick).
pub const RETICLE_SPEED: f64 = 6.5;

// --- Hostiles ---

/// Hostile descent speed (px/tick).
pub const HOSTILE_SPEED: f64 = 2.0;

/// Hostile sprite size.
pub const HOSTILE_WIDTH: f64 = 25.0;
pub const HOSTILE_HEIGHT: f64 = 30.0;

/// Score awarded for destroying a hostile.
pub const HOSTILE_SCORE_VALUE: u32 = 150;

/// Credits awarded for destroying a hostile.
pub const HOSTILE_CREDIT_VALUE: u32 = 10;

/// Sprite orientation offsets (degrees) for the rendering collaborator.
pub const HOSTILE_ANGLE_OFFSET: f64 = 270.0;
pub const PROJECTILE_ANGLE_OFFSET: f64 = 90.0;

// --- Projectiles ---

/// Projectile sprite size.
pub const PROJECTILE_WIDTH: f64 = 15.0;
pub const PROJECTILE_HEIGHT: f64 = 25.0;

// --- Turrets ---

/// Turret missile speed (px/tick).
pub const TURRET_MISSILE_SPEED: f64 = 5.0;

/// Turret engagement range (px, straight line).
pub const TURRET_RANGE: f64 = 100.0;

/// Ticks between turret shots.
pub const TURRET_FIRE_RATE_FRAMES: u32 = 10;

/// Credits needed to place a turret.
pub const TURRET_PRICE: u32 = 100;

/// Turret sprite size.
pub const TURRET_WIDTH: f64 = 20.0;
pub const TURRET_HEIGHT: f64 = 20.0;

/// Slots where turrets may be placed (top-left corners).
pub const TURRET_SLOTS: [(f64, f64); 4] = [(100.0, 550.0), (200.0, 550.0), (565.0, 550.0), (665.0, 550.0)];

// --- Waves ---

/// Enemy count of the zeroth wave.
pub const INITIAL_ENEMIES: u32 = 5;

/// Pause between the end of one wave and the start of the next (seconds).
pub const TIME_BETWEEN_WAVES_SECS: f64 = 1.0;
