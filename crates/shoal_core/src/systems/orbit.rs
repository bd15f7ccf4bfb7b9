//! Pointer-seeking behaviour for followers.
//!
//! Far from the ring of radius `orbit_distance` a follower is pulled toward
//! the nearest point on it; on the ring it is pushed along the tangent. The
//! two weights always sum to one half, so the hand-off is smooth.

use crate::config::ParameterSet;
use shoal_data::{Position, Velocity};

/// Velocity change pulling a follower at `position` onto its orbit.
///
/// Returns zero when the follower sits exactly on the pointer.
#[must_use]
pub fn orbit_force(position: &Position, pointer: &Position, params: &ParameterSet) -> Velocity {
    let dx = pointer.x - position.x;
    let dy = pointer.y - position.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance <= 0.0 {
        return Velocity::default();
    }

    let ux = dx / distance;
    let uy = dy / distance;
    let target_x = pointer.x - ux * params.orbit_distance;
    let target_y = pointer.y - uy * params.orbit_distance;
    let (tangent_x, tangent_y) = (-uy, ux);

    let distance_factor =
        ((distance - params.orbit_distance).abs() / params.orbit_distance).min(1.0);
    let approach_strength = 0.5 * distance_factor;
    let orbit_strength = 0.5 * (1.0 - distance_factor);
    let orbit_speed = params.base_speed * 2.0;

    Velocity {
        vx: ((target_x - position.x) * approach_strength
            + tangent_x * orbit_strength * orbit_speed)
            * params.base_speed,
        vy: ((target_y - position.y) * approach_strength
            + tangent_y * orbit_strength * orbit_speed)
            * params.base_speed,
    }
}
