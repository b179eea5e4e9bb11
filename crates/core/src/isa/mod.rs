//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the supported opcode subset, the instruction sum type produced by the assembler
//! and consumed by the interpreter, register naming, and a disassembler.
//!
//! # Opcodes
//!
//! * Register arithmetic: `add`, `sub`.
//! * Immediate arithmetic: `addi`.
//! * Memory: `lw`, `sw`.
//! * Branches: `beq`, `bne`, `blt`, `bge`, `bgt`, `ble`.
//! * Jumps: `j`, `jal`.
//! * No operands: `exit`, `halt`, `nop`.

/// Register name mappings.
pub mod abi;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction and operand bundle types.
pub mod instruction;

/// Opcodes, operand formats and format classes.
pub mod opcode;

pub use instruction::{ImmMode, Immediate, Instruction, OperandBundle, Operands};
pub use opcode::{FormatClass, Opcode, OperandFormat};
