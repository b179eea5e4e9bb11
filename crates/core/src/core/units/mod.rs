//! Execution units.
//!
//! 1. **ALU:** Integer arithmetic and comparisons.
//! 2. **BRU:** Branch and jump target resolution.

/// Arithmetic Logic Unit.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;
