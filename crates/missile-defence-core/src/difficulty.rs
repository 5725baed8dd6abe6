//! Difficulty progression: how many hostiles a wave has and how long it spawns for.
//!
//! Enemy count grows quadratically with the wave index while the spawn window grows
//! with a square root, so hostiles arrive ever more densely.

use crate::enums::Difficulty;

/// Number of hostiles in wave `wave_index`: `round(initial + wave_index² · constant)`.
///
/// Negative results (only possible with a negative constant) clamp to zero.
pub fn enemies_for_wave(initial: u32, wave_index: u32, constant: f64) -> u32 {
    let index = wave_index as f64;
    let count = (initial as f64 + index * index * constant).round();
    if count <= 0.0 {
        0
    } else {
        count as u32
    }
}

/// Seconds over which a wave's hostiles spawn: `5·√(4·wave_index) + 5`.
pub fn spawn_period_for_wave(wave_index: u32) -> f64 {
    5.0 * (4.0 * wave_index as f64).sqrt() + 5.0
}

/// Spawn window of a wave expressed in ticks.
pub fn spawn_period_frames(wave_index: u32, tick_rate: u32) -> f64 {
    spawn_period_for_wave(wave_index) * tick_rate as f64
}

/// Enemy count for a wave at the given difficulty.
pub fn enemies_for_difficulty(initial: u32, wave_index: u32, difficulty: Difficulty) -> u32 {
    enemies_for_wave(initial, wave_index, difficulty.enemy_constant())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroth_wave_uses_initial_count() {
        assert_eq!(enemies_for_wave(5, 0, 0.8), 5);
        assert!((spawn_period_for_wave(0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn known_values() {
        // 5 + 3² · 0.5 = 9.5, rounds half away from zero.
        assert_eq!(enemies_for_wave(5, 3, 0.5), 10);
        // 5 + 4² · 1.3 = 25.8
        assert_eq!(enemies_for_wave(5, 4, 1.3), 26);
        // 5·√4 + 5 = 15
        assert!((spawn_period_for_wave(1) - 15.0).abs() < 1e-12);
        assert!((spawn_period_frames(1, 60) - 900.0).abs() < 1e-9);
    }

    #[test]
    fn harder_difficulty_never_has_fewer_enemies() {
        for wave in 0..20 {
            let easy = enemies_for_difficulty(5, wave, Difficulty::Easy);
            let normal = enemies_for_difficulty(5, wave, Difficulty::Normal);
            let hard = enemies_for_difficulty(5, wave, Difficulty::Hard);
            assert!(easy <= normal && normal <= hard, "wave {wave}");
        }
    }
}
