use serde::{Deserialize, Serialize};

/// World position of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Velocity of an agent, in world units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    #[must_use]
    pub const fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Heading in radians, as `atan2(vy, vx)`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.vy.atan2(self.vx)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vx.is_finite() && self.vy.is_finite()
    }
}

/// Fixed rectangular extent of the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub width: f64,
    pub height: f64,
}

impl Domain {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn contains(&self, position: &Position) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }
}

/// A single fish.
///
/// `is_follower` and `size` are fixed at creation. `orientation` is derived
/// from the velocity at the end of every tick and only matters to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub position: Position,
    pub velocity: Velocity,
    pub orientation: f64,
    pub is_follower: bool,
    pub size: f64,
}

impl Agent {
    #[must_use]
    pub fn new(position: Position, velocity: Velocity, is_follower: bool, size: f64) -> Self {
        Self {
            position,
            velocity,
            orientation: velocity.heading(),
            is_follower,
            size,
        }
    }

    /// Speed cap for this agent: followers get a 25% allowance over `max_speed`.
    #[must_use]
    pub fn effective_max_speed(&self, max_speed: f64) -> f64 {
        if self.is_follower {
            max_speed * 1.25
        } else {
            max_speed
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.orientation.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_speed_allowance() {
        let follower = Agent::new(Position::new(0.0, 0.0), Velocity::default(), true, 12.0);
        let plain = Agent::new(Position::new(0.0, 0.0), Velocity::default(), false, 12.0);
        assert!((follower.effective_max_speed(2.0) - 2.5).abs() < f64::EPSILON);
        assert!((plain.effective_max_speed(2.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_orientation_tracks_initial_velocity() {
        let agent = Agent::new(Position::new(1.0, 1.0), Velocity::new(0.0, 1.0), false, 14.0);
        assert!((agent.orientation - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_domain_excludes_upper_edge() {
        let domain = Domain::new(600.0, 400.0);
        assert!(domain.contains(&Position::new(0.0, 0.0)));
        assert!(!domain.contains(&Position::new(600.0, 10.0)));
        assert!(!domain.contains(&Position::new(10.0, -0.1)));
    }

    #[test]
    fn test_agent_json_shape() {
        let agent = Agent::new(Position::new(3.0, 4.0), Velocity::new(1.0, 0.0), true, 13.5);
        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["position"]["x"], 3.0);
        assert_eq!(json["is_follower"], true);
    }
}
