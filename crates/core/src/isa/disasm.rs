//! Instruction disassembler.
//!
//! Renders an [`Instruction`] back into canonical assembly text for the execution trace,
//! state dumps and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! use mipsim_core::isa::instruction::{Immediate, ImmMode, Instruction, OperandBundle, Operands};
//! use mipsim_core::isa::opcode::{FormatClass, Opcode};
//!
//! let bundle = OperandBundle {
//!     class: FormatClass::ImmediateWrite,
//!     operands: Operands::Immediate { rs: 8, rt: 10, imm: Immediate::Literal(16), mode: ImmMode::Plain },
//! };
//! let inst = Instruction::build(Opcode::Addi, bundle, 1);
//! assert_eq!(disassemble(&inst), "addi r10, r8, 16");
//! ```

use super::instruction::{ImmMode, Immediate, Instruction, Operands};
use super::opcode::OperandFormat;
use crate::common::addr::imm_to_addr;

/// Formats an immediate field, showing word addresses as byte addresses.
fn immediate(imm: &Immediate, mode: ImmMode) -> String {
    match (imm, mode) {
        (Immediate::Unresolved(label), _) => label.clone(),
        (Immediate::Literal(v), ImmMode::Plain) => v.to_string(),
        (Immediate::Literal(v), ImmMode::WordAddress) => format!("{:#010x}", imm_to_addr(*v)),
    }
}

/// Disassembles an instruction into a human-readable string.
///
/// Returns text like `"add r3, r1, r2"` or `"lw r16, 0(r8)"`.
pub fn disassemble(inst: &Instruction) -> String {
    let op = inst.opcode;
    match &inst.operands {
        Operands::None => op.mnemonic().to_string(),
        Operands::Register { rs, rt, rd } => format!("{op} r{rd}, r{rs}, r{rt}"),
        Operands::Immediate { rs, rt, imm, mode } => match op.format() {
            OperandFormat::Memory if *mode == ImmMode::WordAddress => {
                format!("{op} r{rt}, {}", immediate(imm, *mode))
            }
            OperandFormat::Memory => format!("{op} r{rt}, {}(r{rs})", immediate(imm, *mode)),
            OperandFormat::Branch => format!("{op} r{rs}, r{rt}, {}", immediate(imm, *mode)),
            _ => format!("{op} r{rt}, r{rs}, {}", immediate(imm, *mode)),
        },
        Operands::Jump { target } => match target {
            Immediate::Unresolved(label) => format!("{op} {label}"),
            Immediate::Literal(v) => format!("{op} {:#010x}", imm_to_addr(*v)),
        },
    }
}

