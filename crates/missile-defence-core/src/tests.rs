use proptest::prelude::*;

use crate::commands::PlayerCommand;
use crate::components::{Hitbox, SpriteCatalog};
use crate::difficulty::{enemies_for_wave, spawn_period_for_wave};
use crate::enums::*;
use crate::events::GameEvent;
use crate::geometry::vector_from_positions;
use crate::state::GameStateSnapshot;
use crate::types::{Arena, Position, Rect};

#[test]
fn test_player_command_tagged_json() {
    let cmd: PlayerCommand =
        serde_json::from_str(r#"{"type":"MoveReticle","direction":"Left","enable":true}"#)
            .unwrap();
    assert!(matches!(
        cmd,
        PlayerCommand::MoveReticle {
            direction: Direction::Left,
            enable: true
        }
    ));

    let json = serde_json::to_string(&PlayerCommand::PlaceTurret { slot: 2 }).unwrap();
    assert_eq!(json, r#"{"type":"PlaceTurret","slot":2}"#);
}

#[test]
fn test_game_event_tagged_json() {
    let event = GameEvent::WaveStarted {
        wave_number: 1,
        enemy_count: 5,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"WaveStarted""#));
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_snapshot_default_serializes() {
    let snapshot = GameStateSnapshot::default();
    assert_eq!(snapshot.phase, GamePhase::MainMenu);
    assert_eq!(snapshot.round, RoundState::Countdown { ticks_remaining: 0 });
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"MainMenu\""));
}

#[test]
fn test_sprite_catalog_partial_json_uses_defaults() {
    let catalog: SpriteCatalog =
        serde_json::from_str(r#"{"turret":{"width":32.0,"height":40.0}}"#).unwrap();
    assert_eq!(catalog.turret, Hitbox::new(32.0, 40.0));
    assert_eq!(catalog.hostile, SpriteCatalog::default().hostile);
}

#[test]
fn test_touching_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&Rect::new(9.5, 9.5, 1.0, 1.0)));
}

#[test]
fn test_hit_rects_from_reference_scenario() {
    let projectile = Hitbox::new(15.0, 25.0).rect_at(&Position::new(10.0, 10.0));
    let hostile = Hitbox::new(25.0, 30.0).rect_at(&Position::new(15.0, 15.0));
    assert!(projectile.overlaps(&hostile));
    assert!(hostile.overlaps(&projectile));
}

#[test]
fn test_arena_bounds_are_inclusive() {
    let arena = Arena::new(800.0, 600.0);
    assert!(arena.contains(&Position::new(800.0, 600.0)));
    assert!(arena.contains(&Position::new(0.0, 0.0)));
    assert!(!arena.contains(&Position::new(-0.1, 10.0)));
    assert!(!arena.contains(&Position::new(10.0, 600.1)));
    assert_eq!(arena.launch_site(), Position::new(400.0, 600.0));
}

#[test]
fn test_difficulty_constants() {
    assert_eq!(Difficulty::default(), Difficulty::Normal);
    assert!(Difficulty::Easy.enemy_constant() < Difficulty::Normal.enemy_constant());
    assert!(Difficulty::Normal.enemy_constant() < Difficulty::Hard.enemy_constant());
}

proptest! {
    #[test]
    fn velocity_has_requested_magnitude(
        sx in -1000.0f64..1000.0,
        sy in -1000.0f64..1000.0,
        ex in -1000.0f64..1000.0,
        ey in -1000.0f64..1000.0,
        speed in 0.1f64..50.0,
    ) {
        let start = Position::new(sx, sy);
        let end = Position::new(ex, ey);
        prop_assume!(start.distance_to(&end) > 1e-6);
        let v = vector_from_positions(&start, &end, speed).unwrap();
        prop_assert!((v.speed() - speed).abs() < 1e-9 * speed.max(1.0));
        // Points towards the target.
        let dot = v.x * (ex - sx) + v.y * (ey - sy);
        prop_assert!(dot > 0.0);
    }

    #[test]
    fn enemy_count_is_non_decreasing(
        initial in 0u32..50,
        wave in 0u32..200,
        constant in 0.0f64..5.0,
    ) {
        prop_assert!(enemies_for_wave(initial, wave + 1, constant) >= enemies_for_wave(initial, wave, constant));
    }

    #[test]
    fn spawn_period_is_non_decreasing(wave in 0u32..10_000) {
        prop_assert!(spawn_period_for_wave(wave + 1) >= spawn_period_for_wave(wave));
    }
}
