//! # Shoal Core
//!
//! Deterministic motion model for a small flock of fish in a toroidal tank.
//!
//! Each tick every agent:
//! - is pulled onto an orbit around the pointer (followers only)
//! - aligns with, drifts toward and keeps clear of its neighbours
//! - is capped to its speed limit, moved one unit step and wrapped
//!
//! Rules read a snapshot taken at the start of the tick, so the outcome is
//! independent of visit order. Randomness is confined to world creation and
//! comes from a seeded ChaCha RNG.
//!
//! ## Example
//!
//! ```
//! use shoal_core::config::{ParameterSet, WorldConfig};
//! use shoal_core::world::World;
//! use shoal_data::Position;
//!
//! let mut world = World::from_seed(&WorldConfig::default(), 42).unwrap();
//! world.set_pointer(Some(Position::new(300.0, 200.0)));
//!
//! let params = ParameterSet::default();
//! for _ in 0..60 {
//!     world.tick(&params);
//! }
//! assert_eq!(world.tick, 60);
//! ```

/// Toroidal wraparound over the world domain
pub mod boundary;
/// Configuration management for simulation parameters
pub mod config;
pub mod error;
/// Tick metrics and structured logging
pub mod metrics;
/// Pre-tick and render-facing snapshots
pub mod snapshot;
/// Orbit, flocking and movement rules
pub mod systems;
pub mod world;

pub use boundary::BoundaryPolicy;
pub use config::{AppConfig, ParameterSet};
pub use error::{CoreError, Result};
pub use metrics::{init_logging, FlockStats, Metrics};
pub use world::World;
