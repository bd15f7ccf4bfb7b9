//! Tick metrics and structured logging for the simulation.

use crate::world::World;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Aggregate motion statistics for one world state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockStats {
    pub mean_speed: f64,
    /// Mean follower distance to the pointer, when there is one.
    pub mean_orbit_distance: Option<f64>,
}

impl FlockStats {
    #[must_use]
    pub fn measure(world: &World) -> Self {
        if world.agents.is_empty() {
            return Self::default();
        }

        let mean_speed = world
            .agents
            .iter()
            .map(|a| a.velocity.magnitude())
            .sum::<f64>()
            / world.agents.len() as f64;

        let mean_orbit_distance = world.pointer.and_then(|pointer| {
            let distances: Vec<f64> = world
                .agents
                .iter()
                .filter(|a| a.is_follower)
                .map(|a| a.position.distance(&pointer))
                .collect();
            if distances.is_empty() {
                None
            } else {
                Some(distances.iter().sum::<f64>() / distances.len() as f64)
            }
        });

        Self {
            mean_speed,
            mean_orbit_distance,
        }
    }
}

pub struct Metrics {
    tick_count: AtomicU64,
    total_tick_nanos: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(600)
    }
}

impl Metrics {
    /// `log_interval` of zero disables the periodic summary.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            total_tick_nanos: AtomicU64::new(0),
            log_interval,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick and periodically logs a flock summary.
    pub fn record_tick(&self, duration: Duration, world: &World) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.total_tick_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if self.log_interval > 0 && tick.is_multiple_of(self.log_interval) {
            let stats = FlockStats::measure(world);
            tracing::info!(
                tick = world.tick,
                agents = world.agents.len(),
                mean_speed = stats.mean_speed,
                mean_orbit_distance = ?stats.mean_orbit_distance,
                mean_tick_us = self.mean_tick_duration().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn mean_tick_duration(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.total_tick_nanos.load(Ordering::Relaxed) / ticks)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global fmt subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
