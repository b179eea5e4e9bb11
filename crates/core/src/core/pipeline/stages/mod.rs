//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the six stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Retrieves the instruction at the PC.
//! 2. **Decode:** Looks up the control-signal row.
//! 3. **Read-Operands:** Reads source registers and the immediate.
//! 4. **Execute:** Runs the ALU and computes jump/branch targets.
//! 5. **Memory:** Decides branches and performs loads and stores.
//! 6. **Writeback:** Commits the result or ends the run.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Operand read stage implementation.
pub mod operands;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Operand read stage entry point (RF stage).
pub use operands::operand_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
