use serde::{Deserialize, Serialize};
use shoal_data::{Agent, Position, Velocity};

/// Pre-tick kinematic state of one agent.
///
/// Every rule reads these instead of the live agents, which keeps a tick
/// independent of the order agents are visited in.
#[derive(Debug, Clone, Copy)]
pub struct InternalAgentSnapshot {
    pub index: usize,
    pub position: Position,
    pub velocity: Velocity,
}

impl InternalAgentSnapshot {
    #[must_use]
    pub fn capture(index: usize, agent: &Agent) -> Self {
        Self {
            index,
            position: agent.position,
            velocity: agent.velocity,
        }
    }
}

/// What a renderer needs to draw one fish.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub x: f64,
    pub y: f64,
    pub orientation: f64,
    pub is_follower: bool,
    pub size: f64,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            x: agent.position.x,
            y: agent.position.y,
            orientation: agent.orientation,
            is_follower: agent.is_follower,
            size: agent.size,
        }
    }
}

/// Owned, serializable view of a world after a tick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub pointer: Option<Position>,
    /// Radius of the ring followers circle, for drawing around the pointer.
    pub orbit_distance: f64,
    pub agents: Vec<AgentSnapshot>,
}
