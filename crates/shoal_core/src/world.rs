//! The flock and everything a tick needs to advance it.

use crate::config::{ParameterSet, WorldConfig};
use crate::error::{CoreError, Result};
use crate::snapshot::{AgentSnapshot, InternalAgentSnapshot, WorldSnapshot};
use crate::systems::{step_agent, StepContext};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shoal_data::{Agent, Domain, Position, Velocity};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Initial velocity components are drawn from `[-INITIAL_SPEED, INITIAL_SPEED)`.
pub const INITIAL_SPEED: f64 = 2.0;
const MIN_SIZE: f64 = 12.0;
const SIZE_SPREAD: f64 = 4.0;

pub struct World {
    pub domain: Domain,
    pub agents: Vec<Agent>,
    /// Present only while the pointer is active; `(0, 0)` is a valid location.
    pub pointer: Option<Position>,
    pub tick: u64,
    snapshots: Vec<InternalAgentSnapshot>,
}

impl World {
    /// Spawns `config.agent_count` agents, the first `config.follower_count`
    /// of them followers, drawing all randomness from `rng`.
    pub fn new<R: Rng>(config: &WorldConfig, rng: &mut R) -> Result<Self> {
        if config.follower_count > config.agent_count {
            return Err(CoreError::TooManyFollowers {
                followers: config.follower_count,
                agents: config.agent_count,
            });
        }
        let domain = validated_domain(config.width, config.height)?;

        let agents = (0..config.agent_count)
            .map(|i| {
                let position = Position::new(
                    rng.gen_range(0.0..domain.width),
                    rng.gen_range(0.0..domain.height),
                );
                let velocity = Velocity::new(
                    rng.gen_range(-INITIAL_SPEED..INITIAL_SPEED),
                    rng.gen_range(-INITIAL_SPEED..INITIAL_SPEED),
                );
                let size = MIN_SIZE + rng.gen_range(0.0..SIZE_SPREAD);
                Agent::new(position, velocity, i < config.follower_count, size)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            agents = agents.len(),
            followers = config.follower_count,
            width = domain.width,
            height = domain.height,
            "World spawned"
        );

        Ok(Self::assemble(domain, agents))
    }

    pub fn from_seed(config: &WorldConfig, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(config, &mut rng)
    }

    /// Seeds from `config.seed` when set, otherwise from OS entropy.
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(config, &mut rng)
    }

    /// Builds a world around hand-placed agents.
    pub fn with_agents(domain: Domain, agents: Vec<Agent>) -> Result<Self> {
        let domain = validated_domain(domain.width, domain.height)?;
        Ok(Self::assemble(domain, agents))
    }

    fn assemble(domain: Domain, agents: Vec<Agent>) -> Self {
        let capacity = agents.len();
        Self {
            domain,
            agents,
            pointer: None,
            tick: 0,
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<Position>) {
        self.pointer = pointer;
    }

    #[must_use]
    pub fn follower_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_follower).count()
    }

    /// Advances every agent by one unit time step.
    ///
    /// All rules read the state captured at the start of the call, so the
    /// result does not depend on the order agents are visited in.
    pub fn tick(&mut self, params: &ParameterSet) {
        self.snapshots.clear();
        self.snapshots.extend(
            self.agents
                .iter()
                .enumerate()
                .map(|(i, a)| InternalAgentSnapshot::capture(i, a)),
        );

        let ctx = StepContext {
            snapshots: &self.snapshots,
            params,
            pointer: self.pointer,
            domain: &self.domain,
        };

        #[cfg(feature = "parallel")]
        self.agents
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, agent)| step_agent(i, agent, &ctx));

        #[cfg(not(feature = "parallel"))]
        self.agents
            .iter_mut()
            .enumerate()
            .for_each(|(i, agent)| step_agent(i, agent, &ctx));

        self.tick += 1;
    }

    /// Reports the first agent holding a NaN or infinite value.
    pub fn validate(&self) -> Result<()> {
        match self.agents.iter().position(|a| !a.is_finite()) {
            Some(index) => Err(CoreError::NonFinite { index }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn snapshot(&self, params: &ParameterSet) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.domain.width,
            height: self.domain.height,
            pointer: self.pointer,
            orbit_distance: params.orbit_distance,
            agents: self.agents.iter().map(AgentSnapshot::from).collect(),
        }
    }
}

fn validated_domain(width: f64, height: f64) -> Result<Domain> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(CoreError::InvalidDomain { width, height });
    }
    Ok(Domain::new(width, height))
}
