//! Opcode definitions.
//!
//! The supported opcode subset, grouped by operand format. The format decides how the
//! operand text is validated; the format class decides which register (if any) receives
//! the result.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Supported opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    /// Register addition.
    Add,
    /// Register subtraction.
    Sub,
    /// Immediate addition.
    Addi,
    /// Load double word.
    Lw,
    /// Store double word.
    Sw,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than.
    Blt,
    /// Branch if greater or equal.
    Bge,
    /// Branch if greater than.
    Bgt,
    /// Branch if less or equal.
    Ble,
    /// Absolute jump.
    J,
    /// Absolute jump, linking the return address into `r31`.
    Jal,
    /// Terminate the run.
    Exit,
    /// Terminate the run.
    Halt,
    /// No operation.
    Nop,
}

/// Operand grammar of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OperandFormat {
    /// No operands at all.
    None,
    /// `rd, rs, rt`.
    Register,
    /// `rt, rs, imm16`.
    ImmediateArith,
    /// `rt, imm16(rs)` or `rt, label`.
    Memory,
    /// `rs, rt, imm16|label`.
    Branch,
    /// `label|imm26`.
    Jump,
}

/// Format class: decides the write-destination slot of an operand bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FormatClass {
    /// Nothing is written.
    None,
    /// Writes the `rd` field.
    Register,
    /// Immediate format whose `rt` is read.
    ImmediateRead,
    /// Immediate format whose `rt` is written.
    ImmediateWrite,
    /// Jump without link.
    Jump,
    /// Jump writing the link register.
    JumpLink,
}

/// Raised for a mnemonic outside the supported subset.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Opcode: \"{0}\" Not Recognised!")]
pub struct UnknownOpcode(pub String);

impl Opcode {
    /// Every supported opcode, in table order.
    pub const ALL: [Self; 16] = [
        Self::Add,
        Self::Sub,
        Self::Addi,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bgt,
        Self::Ble,
        Self::J,
        Self::Jal,
        Self::Exit,
        Self::Halt,
        Self::Nop,
    ];

    /// Lowercase assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Addi => "addi",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bgt => "bgt",
            Self::Ble => "ble",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Exit => "exit",
            Self::Halt => "halt",
            Self::Nop => "nop",
        }
    }

    /// Operand grammar expected by this opcode.
    pub const fn format(self) -> OperandFormat {
        match self {
            Self::Add | Self::Sub => OperandFormat::Register,
            Self::Addi => OperandFormat::ImmediateArith,
            Self::Lw | Self::Sw => OperandFormat::Memory,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bgt | Self::Ble => {
                OperandFormat::Branch
            }
            Self::J | Self::Jal => OperandFormat::Jump,
            Self::Exit | Self::Halt | Self::Nop => OperandFormat::None,
        }
    }

    /// Format class, deciding which register is written.
    pub const fn class(self) -> FormatClass {
        match self {
            Self::Add | Self::Sub => FormatClass::Register,
            Self::Addi | Self::Lw => FormatClass::ImmediateWrite,
            Self::Sw | Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bgt | Self::Ble => {
                FormatClass::ImmediateRead
            }
            Self::J => FormatClass::Jump,
            Self::Jal => FormatClass::JumpLink,
            Self::Exit | Self::Halt | Self::Nop => FormatClass::None,
        }
    }

    /// True for opcodes that end the run.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exit | Self::Halt)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == lower)
            .ok_or_else(|| UnknownOpcode(s.to_string()))
    }
}
