//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the six-stage instruction pipeline. One
//! instruction passes through every stage before the next is fetched, so there are no
//! hazards to detect or forward around. It includes the following components:
//! 1. **Control:** The fixed control-signal row of each opcode.
//! 2. **Latches:** Inter-stage entries carrying one instruction forward.
//! 3. **Signals:** Control signal types.
//! 4. **Stages:** Fetch, Decode, Read-Operands, Execute, Memory and Writeback.
//! 5. **Trace:** Per-stage records of what each instruction did.

/// Control-signal table.
pub mod control;

/// Inter-stage pipeline latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

/// Execution trace records.
pub mod trace;
