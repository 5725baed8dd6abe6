//! Steering and orientation helpers.

use glam::DVec2;

use crate::error::GeometryError;
use crate::types::{Position, Velocity};

/// Velocity of magnitude `speed` pointing from `start` towards `end`.
///
/// Returns [`GeometryError::CoincidentPoints`] when the two positions are equal,
/// since the direction is undefined. Callers decide the fallback.
pub fn vector_from_positions(
    start: &Position,
    end: &Position,
    speed: f64,
) -> Result<Velocity, GeometryError> {
    let delta = end.as_dvec2() - start.as_dvec2();
    let length = delta.length();
    if length == 0.0 || !length.is_finite() {
        return Err(GeometryError::CoincidentPoints);
    }
    Ok(Velocity::from(delta * (speed / length)))
}

/// Sprite rotation in degrees for something travelling from `start` to `end`.
///
/// The polar angle of `end - start` is negated (screen y points down) and shifted
/// by `offset_degrees`. Coincident points are treated as a polar angle of 0.
pub fn angle_from_positions(start: &Position, end: &Position, offset_degrees: f64) -> f64 {
    let delta: DVec2 = end.as_dvec2() - start.as_dvec2();
    let polar = if delta == DVec2::ZERO {
        0.0
    } else {
        delta.y.atan2(delta.x).to_degrees()
    };
    -polar - offset_degrees
}

/// Straight-line distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.distance_to(b)
}
