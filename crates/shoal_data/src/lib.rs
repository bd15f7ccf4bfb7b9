//! Plain data types shared by the shoal simulation and its collaborators.

pub mod data;

pub use data::agent::{Agent, Domain, Position, Velocity};
