//! Per-tick motion for hostiles and projectiles.
//!
//! Positions advance by one whole velocity step per tick.

use hecs::World;

use missile_defence_core::components::{Hostile, Projectile};
use missile_defence_core::types::{Arena, Position, Velocity};

/// What a hostile reported after moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostileStep {
    /// Still visible this tick, so its wave cannot be finished.
    pub live: bool,
    /// Reached the ground this tick. Reported once per hostile.
    pub hit_ground: bool,
}

/// Advance a hostile one tick.
///
/// Once at ground level (`y >= ground_y`) the vertical velocity is zeroed and the
/// hostile stops moving. A visible grounded hostile reports `hit_ground` and hides.
pub fn advance_hostile(
    pos: &mut Position,
    vel: &mut Velocity,
    hostile: &mut Hostile,
    ground_y: f64,
) -> HostileStep {
    if !hostile.reached_ground {
        pos.advance(vel);
        if pos.y >= ground_y {
            vel.y = 0.0;
            hostile.reached_ground = true;
        }
    }

    let mut step = HostileStep {
        live: hostile.visible,
        hit_ground: false,
    };
    if hostile.reached_ground && hostile.visible {
        hostile.visible = false;
        step.hit_ground = true;
    }
    step
}

/// Advance a projectile one tick. Leaving the arena hides it for good.
pub fn advance_projectile(
    pos: &mut Position,
    vel: &Velocity,
    projectile: &mut Projectile,
    arena: &Arena,
) {
    if !projectile.visible {
        return;
    }
    if !arena.contains(pos) {
        projectile.visible = false;
        return;
    }
    pos.advance(vel);
    if !arena.contains(pos) {
        projectile.visible = false;
    }
}

/// Move every projectile in the world.
pub fn run_projectiles(world: &mut World, arena: &Arena) {
    for (_entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Projectile)>()
    {
        advance_projectile(pos, vel, projectile, arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use missile_defence_core::enums::Emitter;

    fn hostile() -> Hostile {
        Hostile {
            spawn: Position::new(100.0, 0.0),
            aim: Position::new(100.0, 570.0),
            visible: true,
            reached_ground: false,
            score_value: 150,
            credit_value: 10,
            heading_deg: 0.0,
        }
    }

    fn projectile() -> Projectile {
        Projectile {
            emitter: Emitter::Player,
            launch: Position::new(400.0, 600.0),
            target: Position::new(400.0, 0.0),
            visible: true,
            heading_deg: 0.0,
        }
    }

    #[test]
    fn hostile_reports_ground_once() {
        let mut pos = Position::new(100.0, 566.0);
        let mut vel = Velocity::new(0.0, 2.0);
        let mut h = hostile();

        let first = advance_hostile(&mut pos, &mut vel, &mut h, 570.0);
        assert_eq!(first, HostileStep { live: true, hit_ground: false });
        assert_eq!(pos.y, 568.0);

        let second = advance_hostile(&mut pos, &mut vel, &mut h, 570.0);
        assert_eq!(second, HostileStep { live: true, hit_ground: true });
        assert_eq!(vel.y, 0.0);
        assert!(!h.visible);

        for _ in 0..10 {
            let step = advance_hostile(&mut pos, &mut vel, &mut h, 570.0);
            assert_eq!(step, HostileStep::default());
        }
        assert_eq!(pos.y, 570.0);
    }

    #[test]
    fn hidden_hostile_is_not_live() {
        let mut pos = Position::new(100.0, 100.0);
        let mut vel = Velocity::new(0.0, 2.0);
        let mut h = hostile();
        h.visible = false;
        let step = advance_hostile(&mut pos, &mut vel, &mut h, 570.0);
        assert!(!step.live);
        assert!(!step.hit_ground);
    }

    #[test]
    fn projectile_hides_when_leaving_arena() {
        let arena = Arena::new(800.0, 600.0);
        let mut pos = Position::new(400.0, 5.0);
        let vel = Velocity::new(0.0, -7.0);
        let mut p = projectile();

        advance_projectile(&mut pos, &vel, &mut p, &arena);
        assert!(!p.visible);
        assert_eq!(pos.y, -2.0);

        // Invisible projectiles stay put.
        advance_projectile(&mut pos, &vel, &mut p, &arena);
        assert_eq!(pos.y, -2.0);
    }

    #[test]
    fn projectile_on_edge_is_in_bounds() {
        let arena = Arena::new(800.0, 600.0);
        let mut pos = Position::new(400.0, 607.0);
        let vel = Velocity::new(0.0, -7.0);
        let mut p = projectile();
        // Starts outside, hidden before moving.
        advance_projectile(&mut pos, &vel, &mut p, &arena);
        assert!(!p.visible);
        assert_eq!(pos.y, 607.0);

        let mut pos = Position::new(400.0, 600.0);
        let mut p = projectile();
        advance_projectile(&mut pos, &vel, &mut p, &arena);
        assert!(p.visible);
        assert_eq!(pos.y, 593.0);
    }
}
