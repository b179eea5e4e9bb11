//! Simulation driver and program loading.
//!
//! Provides the simulator that runs an assembled program to completion, and utilities
//! for reading source and configuration files.

/// Source and configuration loading.
pub mod loader;

/// Run loop and step limit.
pub mod simulator;

pub use loader::LoadError;
pub use simulator::Simulator;
