//! Backing storage for the two address-space regions.
//!
//! 1. **Data Store:** Sparse double-word slots behind the data region.
//! 2. **Instruction Store:** Ordered instructions behind the instruction region.

/// Data region storage.
pub mod data;

/// Instruction region storage.
pub mod text;

pub use data::DataStore;
pub use text::InstructionStore;
