//! MIPS-subset assembler and pipeline interpreter library.
//!
//! This crate assembles a small MIPS-like instruction subset and executes it on a
//! six-stage pipeline model. It provides the following:
//! 1. **Assembler:** Operand validation, two-pass placement and label resolution, with
//!    every problem collected into a line-numbered diagnostics log.
//! 2. **Memory:** Instruction and data regions with bit-exact supported/valid bounds.
//! 3. **ISA:** Opcodes, operand formats, the instruction sum type and a disassembler.
//! 4. **Core:** Fetch, Decode, Read-Operands, Execute, Memory-Access and Write-Back
//!    driven by a fixed control-signal table, producing a per-stage trace.
//! 5. **Simulation:** Loader, configuration, step limit and run statistics.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Simulator, asm::assemble_source};
//!
//! let program = assemble_source("addi r1, r0, 5\nadd r2, r1, r1\nexit\n").unwrap();
//! let mut sim = Simulator::new(program, &Config::default());
//! sim.run().unwrap();
//! assert_eq!(sim.cpu.regs.read(2), 10);
//! ```

/// Two-pass assembler (tokenizer, operand validator, placement, resolution).
pub mod asm;
/// Common types and constants (address regions, diagnostics, errors, registers).
pub mod common;
/// Run configuration (trace, step limit, dump toggles).
pub mod config;
/// CPU core (pipeline, stages, units, trace).
pub mod core;
/// Instruction set (opcodes, instructions, register names, disassembly).
pub mod isa;
/// Instruction and data stores.
pub mod memory;
/// Program loader and simulator.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, stores, trace and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
