//! Core processor implementation.
//!
//! This module contains the CPU state, the instruction pipeline that executes one
//! instruction at a time, and the execution units it drives.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, signals, trace).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::{Cpu, MachineState};
