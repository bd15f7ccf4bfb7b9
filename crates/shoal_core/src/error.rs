//! Error types for shoal_core.
//!
//! A tick itself cannot fail; these cover world construction, state
//! validation and configuration I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// More followers requested than agents exist.
    #[error("follower count {followers} exceeds agent count {agents}")]
    TooManyFollowers { followers: usize, agents: usize },

    /// Domain dimensions must be finite and strictly positive.
    #[error("invalid domain {width}x{height}")]
    InvalidDomain { width: f64, height: f64 },

    /// An agent carries a NaN or infinite coordinate.
    #[error("agent {index} has non-finite state")]
    NonFinite { index: usize },

    #[error("configuration file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
