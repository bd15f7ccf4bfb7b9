pub mod app;
pub mod model;

pub use shoal_core::{CoreError, ParameterSet};
pub use shoal_data::{Agent, Domain, Position, Velocity};
