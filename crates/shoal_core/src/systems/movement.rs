//! Speed cap, integration, orientation and edge wrap for one agent.

use crate::boundary::BoundaryPolicy;
use shoal_data::{Domain, Position, Velocity};

pub struct MovementContext<'a> {
    pub position: &'a mut Position,
    pub velocity: &'a mut Velocity,
    pub orientation: &'a mut f64,
    pub max_speed: f64,
    pub domain: &'a Domain,
}

/// Rescales `velocity` onto the cap when it is faster, keeping direction.
pub fn apply_speed_cap(velocity: &mut Velocity, max_speed: f64) {
    let speed = velocity.magnitude();
    if speed > max_speed {
        velocity.vx = velocity.vx / speed * max_speed;
        velocity.vy = velocity.vy / speed * max_speed;
    }
}

/// Caps speed, advances one unit time step, refreshes heading and wraps.
pub fn handle_movement(ctx: MovementContext) {
    apply_speed_cap(ctx.velocity, ctx.max_speed);

    ctx.position.x += ctx.velocity.vx;
    ctx.position.y += ctx.velocity.vy;
    *ctx.orientation = ctx.velocity.heading();

    *ctx.position = ctx.domain.wrap(*ctx.position);
}
