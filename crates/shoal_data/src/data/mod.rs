//! Core data structures for the shoal simulation.

pub mod agent;
