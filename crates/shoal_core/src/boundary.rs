//! Toroidal wraparound over the world domain.
//!
//! Each coordinate is reduced independently into `[0, dimension)` with a
//! Euclidean remainder, so an agent leaving one edge re-enters the opposite
//! edge carrying its overshoot. A coordinate landing exactly on the upper
//! edge maps to zero.

use shoal_data::{Domain, Position};

fn wrap_axis(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negative inputs up to `extent` itself.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

pub trait BoundaryPolicy {
    fn wrap(&self, position: Position) -> Position;
}

impl BoundaryPolicy for Domain {
    fn wrap(&self, position: Position) -> Position {
        Position {
            x: wrap_axis(position.x, self.width),
            y: wrap_axis(position.y, self.height),
        }
    }
}
