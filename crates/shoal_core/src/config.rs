//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to `config.toml`. Defaults reproduce
//! the classic 600x400 tank with twenty fish, half of them followers.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 600.0
//! height = 400.0
//! agent_count = 20
//! follower_count = 10
//! seed = 42
//!
//! [params]
//! base_speed = 0.05
//! max_speed = 1.0
//! orbit_distance = 50.0
//!
//! [scheduler]
//! target_fps = 60
//! log_interval = 600
//! ```

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// World-level configuration: dimensions and initial population.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub agent_count: usize,
    pub follower_count: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            agent_count: 20,
            follower_count: 10,
            seed: None,
        }
    }
}

/// The three externally tunable scalars read by every tick.
///
/// The core never validates these; producers call [`ParameterSet::clamped`]
/// when they want the documented ranges enforced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ParameterSet {
    /// Scales every flocking and orbit force.
    pub base_speed: f64,
    /// Speed cap before the follower allowance.
    pub max_speed: f64,
    /// Stand-off radius followers try to keep from the pointer.
    pub orbit_distance: f64,
}

impl ParameterSet {
    pub const BASE_SPEED_RANGE: (f64, f64) = (0.01, 1.0);
    pub const MAX_SPEED_RANGE: (f64, f64) = (0.01, 2.0);
    pub const ORBIT_DISTANCE_RANGE: (f64, f64) = (20.0, 150.0);

    pub const BASE_SPEED_STEP: f64 = 0.01;
    pub const MAX_SPEED_STEP: f64 = 0.01;
    pub const ORBIT_DISTANCE_STEP: f64 = 5.0;

    /// Returns a copy with each field clamped into its slider range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            base_speed: self
                .base_speed
                .clamp(Self::BASE_SPEED_RANGE.0, Self::BASE_SPEED_RANGE.1),
            max_speed: self
                .max_speed
                .clamp(Self::MAX_SPEED_RANGE.0, Self::MAX_SPEED_RANGE.1),
            orbit_distance: self
                .orbit_distance
                .clamp(Self::ORBIT_DISTANCE_RANGE.0, Self::ORBIT_DISTANCE_RANGE.1),
        }
    }

    /// Rejects NaN and infinite values, which `clamped` would pass through.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
            ("orbit_distance", self.orbit_distance),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(CoreError::Config(format!(
                "params.{name} must be finite, got {value}"
            ))),
            None => Ok(()),
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            base_speed: 0.05,
            max_speed: 1.0,
            orbit_distance: 50.0,
        }
    }
}

/// Frame pacing for the driving loop. Physics never depends on these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    pub target_fps: u64,
    /// Stop after this many ticks; `None` runs until shut down.
    pub max_ticks: Option<u64>,
    /// Emit a metrics summary every N ticks.
    pub log_interval: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            max_ticks: None,
            log_interval: 600,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub params: ParameterSet,
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    /// Reads `path`, or writes the defaults there if the file is missing.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let default = Self::default();
            fs::write(path, default.to_toml()?)?;
            tracing::info!(path = %path.display(), "Wrote default configuration");
            return Ok(default);
        }
        Self::load(path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.params.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CoreError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_tank() {
        let config = AppConfig::default();
        assert_eq!(config.world.agent_count, 20);
        assert_eq!(config.world.follower_count, 10);
        assert_eq!(config.params.base_speed, 0.05);
        assert_eq!(config.params.max_speed, 1.0);
        assert_eq!(config.params.orbit_distance, 50.0);
        assert_eq!(config.scheduler.target_fps, 60);
    }

    #[test]
    fn test_clamped_enforces_ranges() {
        let params = ParameterSet {
            base_speed: 3.0,
            max_speed: -1.0,
            orbit_distance: 5.0,
        }
        .clamped();
        assert_eq!(params.base_speed, 1.0);
        assert_eq!(params.max_speed, 0.01);
        assert_eq!(params.orbit_distance, 20.0);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml("[params]\norbit_distance = 80.0\n").unwrap();
        assert_eq!(config.params.orbit_distance, 80.0);
        assert_eq!(config.params.base_speed, 0.05);
        assert_eq!(config.world.width, 600.0);
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = AppConfig::from_toml("[world\nwidth = ").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn test_non_finite_params_are_rejected() {
        for raw in ["base_speed = nan", "max_speed = inf", "orbit_distance = -inf"] {
            let err = AppConfig::from_toml(&format!("[params]\n{raw}\n")).unwrap_err();
            assert!(matches!(err, CoreError::Config(_)), "{raw} was accepted");
        }
        assert!(ParameterSet::default().validate().is_ok());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let created = AppConfig::load_or_create(&path).unwrap();
        assert!(path.exists());

        let reloaded = AppConfig::load(&path).unwrap();
        assert_eq!(created, reloaded);
    }
}
