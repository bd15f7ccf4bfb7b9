pub mod boundary {
    pub use shoal_core::boundary::*;
}
pub mod config {
    pub use shoal_core::config::*;
}
pub mod metrics {
    pub use shoal_core::metrics::*;
}
pub mod snapshot {
    pub use shoal_core::snapshot::*;
}
pub mod systems {
    pub use shoal_core::systems::*;
}
pub mod world {
    pub use shoal_core::world::*;
}
pub mod state {
    pub use shoal_data::*;
}
