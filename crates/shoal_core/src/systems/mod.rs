//! Per-agent rules applied during a tick.
//!
//! Order within an agent: orbit, flocking, then movement (cap, integrate,
//! orient, wrap).

pub mod flocking;
pub mod movement;
pub mod orbit;

use crate::config::ParameterSet;
use crate::snapshot::InternalAgentSnapshot;
use shoal_data::{Agent, Domain, Position};

/// Read-only inputs shared by every agent in one tick.
pub struct StepContext<'a> {
    pub snapshots: &'a [InternalAgentSnapshot],
    pub params: &'a ParameterSet,
    pub pointer: Option<Position>,
    pub domain: &'a Domain,
}

/// Advances a single agent by one tick.
pub fn step_agent(index: usize, agent: &mut Agent, ctx: &StepContext) {
    if agent.is_follower {
        if let Some(pointer) = ctx.pointer {
            let pull = orbit::orbit_force(&agent.position, &pointer, ctx.params);
            agent.velocity.vx += pull.vx;
            agent.velocity.vy += pull.vy;
        }
    }

    let steer = flocking::neighbor_forces(
        index,
        &agent.position,
        &agent.velocity,
        ctx.snapshots,
        ctx.params.base_speed,
    );
    agent.velocity.vx += steer.vx;
    agent.velocity.vy += steer.vy;

    let max_speed = agent.effective_max_speed(ctx.params.max_speed);
    movement::handle_movement(movement::MovementContext {
        position: &mut agent.position,
        velocity: &mut agent.velocity,
        orientation: &mut agent.orientation,
        max_speed,
        domain: ctx.domain,
    });
}
