use anyhow::{Context, Result};
use std::time::Instant;

use crate::app::input::{InputEvent, InteractionState};
use crate::app::renderer::Frame;
use shoal_core::config::AppConfig;
use shoal_core::metrics::Metrics;
use shoal_core::world::World;

/// The world plus everything the outside world has told it.
pub struct App {
    pub world: World,
    pub interaction: InteractionState,
    pub config: AppConfig,
    pub metrics: Metrics,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let world = World::from_config(&config.world).context("creating world")?;
        Ok(Self::with_world(world, config))
    }

    pub fn with_world(world: World, config: AppConfig) -> Self {
        let mut interaction = InteractionState::new(config.params);
        interaction.pointer = world.pointer;
        Self {
            world,
            interaction,
            metrics: Metrics::new(config.scheduler.log_interval),
            config,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.interaction.apply(event);
    }

    /// Pushes the latest pointer into the world and advances one tick.
    ///
    /// Debug builds check every agent afterwards and fail the run on the first
    /// non-finite value.
    pub fn step(&mut self) -> Result<()> {
        self.world.set_pointer(self.interaction.pointer);

        let started = Instant::now();
        self.world.tick(&self.interaction.params);
        self.metrics.record_tick(started.elapsed(), &self.world);

        if cfg!(debug_assertions) {
            self.world
                .validate()
                .with_context(|| format!("invalid state after tick {}", self.world.tick))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            world: &self.world,
            params: &self.interaction.params,
        }
    }
}
