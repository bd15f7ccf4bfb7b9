//! Alignment, cohesion and separation against the whole flock.
//!
//! Every other agent is visited once per agent, which is fine for flocks
//! of a few dozen fish.

use crate::snapshot::InternalAgentSnapshot;
use shoal_data::{Position, Velocity};

pub const ALIGNMENT_RADIUS: f64 = 50.0;
pub const COHESION_RADIUS: f64 = 70.0;
pub const SEPARATION_RADIUS: f64 = 25.0;

const ALIGNMENT_WEIGHT: f64 = 0.05;
const COHESION_WEIGHT: f64 = 0.001;
const SEPARATION_WEIGHT: f64 = 0.05;

/// Running totals gathered while scanning neighbours.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeighborSums {
    pub align_vx: f64,
    pub align_vy: f64,
    pub align_count: usize,
    pub cohesion_x: f64,
    pub cohesion_y: f64,
    pub cohesion_count: usize,
    pub separation_x: f64,
    pub separation_y: f64,
    pub separation_count: usize,
}

/// Accumulates neighbour statistics for the agent at `index`.
///
/// Coincident agents still count toward alignment and cohesion, but
/// contribute nothing to separation since they define no direction.
#[must_use]
pub fn gather_neighbors(
    index: usize,
    position: &Position,
    snapshots: &[InternalAgentSnapshot],
) -> NeighborSums {
    let mut sums = NeighborSums::default();

    for other in snapshots {
        if other.index == index {
            continue;
        }

        let dx = other.position.x - position.x;
        let dy = other.position.y - position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < ALIGNMENT_RADIUS {
            sums.align_vx += other.velocity.vx;
            sums.align_vy += other.velocity.vy;
            sums.align_count += 1;
        }

        if distance < COHESION_RADIUS {
            sums.cohesion_x += other.position.x;
            sums.cohesion_y += other.position.y;
            sums.cohesion_count += 1;
        }

        if distance < SEPARATION_RADIUS && distance > 0.0 {
            sums.separation_x -= dx / distance;
            sums.separation_y -= dy / distance;
            sums.separation_count += 1;
        }
    }

    sums
}

/// Velocity change produced by the three flocking rules.
///
/// `velocity` is the agent's velocity at this point in the tick, i.e. after
/// any orbit contribution, since alignment steers relative to it.
#[must_use]
pub fn neighbor_forces(
    index: usize,
    position: &Position,
    velocity: &Velocity,
    snapshots: &[InternalAgentSnapshot],
    base_speed: f64,
) -> Velocity {
    let sums = gather_neighbors(index, position, snapshots);
    let mut delta = Velocity::default();

    if sums.align_count > 0 {
        let n = sums.align_count as f64;
        delta.vx += (sums.align_vx / n - velocity.vx) * ALIGNMENT_WEIGHT * base_speed;
        delta.vy += (sums.align_vy / n - velocity.vy) * ALIGNMENT_WEIGHT * base_speed;
    }

    if sums.cohesion_count > 0 {
        let n = sums.cohesion_count as f64;
        delta.vx += (sums.cohesion_x / n - position.x) * COHESION_WEIGHT * base_speed;
        delta.vy += (sums.cohesion_y / n - position.y) * COHESION_WEIGHT * base_speed;
    }

    if sums.separation_count > 0 {
        delta.vx += sums.separation_x * SEPARATION_WEIGHT * base_speed;
        delta.vy += sums.separation_y * SEPARATION_WEIGHT * base_speed;
    }

    delta
}
