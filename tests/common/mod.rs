pub mod macros;

use shoal_lib::model::config::ParameterSet;
use shoal_lib::model::world::World;
use shoal_lib::{Agent, Domain, Position, Velocity};

#[allow(dead_code)]
pub struct WorldBuilder {
    domain: Domain,
    agents: Vec<Agent>,
    pointer: Option<Position>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            domain: Domain::new(600.0, 400.0),
            agents: Vec::new(),
            pointer: None,
        }
    }

    pub fn with_domain(mut self, width: f64, height: f64) -> Self {
        self.domain = Domain::new(width, height);
        self
    }

    pub fn with_fish(mut self, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        self.agents.push(Agent::new(
            Position::new(x, y),
            Velocity::new(vx, vy),
            false,
            12.0,
        ));
        self
    }

    pub fn with_follower(mut self, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        self.agents.push(Agent::new(
            Position::new(x, y),
            Velocity::new(vx, vy),
            true,
            12.0,
        ));
        self
    }

    pub fn with_pointer(mut self, x: f64, y: f64) -> Self {
        self.pointer = Some(Position::new(x, y));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::with_agents(self.domain, self.agents).expect("valid test world");
        world.set_pointer(self.pointer);
        world
    }
}

#[allow(dead_code)]
pub fn run_ticks(world: &mut World, params: &ParameterSet, ticks: usize) {
    for _ in 0..ticks {
        world.tick(params);
    }
}
