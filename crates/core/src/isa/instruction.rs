//! Instruction representation.
//!
//! Instructions are a closed sum type over the operand formats. Immediates that name a
//! label stay [`Immediate::Unresolved`] until the resolution pass replaces them, so "not
//! resolved yet" can never be mistaken for "resolved to zero".

use serde::Serialize;

use super::opcode::{FormatClass, Opcode};
use crate::common::constants::LINK_REGISTER;

/// An immediate field: either a known value or a label awaiting resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Immediate {
    /// Concrete signed value.
    Literal(i64),
    /// Label name to be replaced during resolution.
    Unresolved(String),
}

impl Immediate {
    /// Returns the value if resolved.
    pub const fn literal(&self) -> Option<i64> {
        match self {
            Self::Literal(v) => Some(*v),
            Self::Unresolved(_) => None,
        }
    }

    /// Returns the label if still unresolved.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Unresolved(label) => Some(label),
        }
    }
}

/// How an immediate in the Immediate format is interpreted by the datapath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImmMode {
    /// Used as-is (arithmetic operand, byte offset, branch word offset).
    #[default]
    Plain,
    /// A word immediate standing for the byte address `imm << 2`.
    WordAddress,
}

/// Variant payload of an instruction or operand bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum Operands {
    /// `exit`, `halt`, `nop`.
    None,
    /// `add rd, rs, rt`.
    Register {
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
        /// Destination register.
        rd: usize,
    },
    /// `addi`, `lw`, `sw` and branches.
    Immediate {
        /// Source (base) register.
        rs: usize,
        /// Target register; written or read depending on the format class.
        rt: usize,
        /// Immediate or label.
        imm: Immediate,
        /// Interpretation of `imm`.
        mode: ImmMode,
    },
    /// `j`, `jal`.
    Jump {
        /// Absolute word address or label.
        target: Immediate,
    },
}

impl Operands {
    /// Returns the immediate field of the Immediate and Jump formats.
    pub const fn immediate(&self) -> Option<&Immediate> {
        match self {
            Self::Immediate { imm, .. } => Some(imm),
            Self::Jump { target } => Some(target),
            Self::None | Self::Register { .. } => None,
        }
    }

    /// Mutable access to the immediate field.
    pub const fn immediate_mut(&mut self) -> Option<&mut Immediate> {
        match self {
            Self::Immediate { imm, .. } => Some(imm),
            Self::Jump { target } => Some(target),
            Self::None | Self::Register { .. } => None,
        }
    }

    /// Source register pair `(rs, rt)` as seen by the read-operands stage.
    ///
    /// Formats without registers read `r0` twice.
    pub const fn sources(&self) -> (usize, usize) {
        match self {
            Self::Register { rs, rt, .. } | Self::Immediate { rs, rt, .. } => (*rs, *rt),
            Self::None | Self::Jump { .. } => (0, 0),
        }
    }
}

/// Validated operands tagged with their format class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperandBundle {
    /// Format class of the opcode the bundle was validated for.
    pub class: FormatClass,
    /// The operands themselves.
    pub operands: Operands,
}

impl OperandBundle {
    /// Register written by an instruction built from this bundle, if any.
    pub const fn destination(&self) -> Option<usize> {
        match (self.class, &self.operands) {
            (FormatClass::Register, Operands::Register { rd, .. }) => Some(*rd),
            (FormatClass::ImmediateWrite, Operands::Immediate { rt, .. }) => Some(*rt),
            (FormatClass::JumpLink, _) => Some(LINK_REGISTER),
            _ => None,
        }
    }
}

/// A placed instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Operation.
    pub opcode: Opcode,
    /// Operand payload.
    pub operands: Operands,
    /// Source line, or `None` for synthesized instructions.
    pub line: Option<usize>,
    /// Address assigned at placement.
    pub address: u64,
    assembled: bool,
}

impl Instruction {
    /// Wraps an opcode and its validated operands into an unplaced, unassembled instruction.
    pub fn build(opcode: Opcode, bundle: OperandBundle, line: usize) -> Self {
        Self {
            opcode,
            operands: bundle.operands,
            line: Some(line),
            address: 0,
            assembled: false,
        }
    }

    /// Terminal `exit` produced when fetching past the last placed instruction.
    pub const fn synthesized_exit(address: u64) -> Self {
        Self {
            opcode: Opcode::Exit,
            operands: Operands::None,
            line: None,
            address,
            assembled: true,
        }
    }

    /// True once a successful assembly has marked the instruction.
    pub const fn is_assembled(&self) -> bool {
        self.assembled
    }

    pub(crate) const fn mark_assembled(&mut self) {
        self.assembled = true;
    }

    /// The label this instruction still waits on, if any.
    pub fn unresolved_label(&self) -> Option<&str> {
        self.operands.immediate().and_then(Immediate::label)
    }

    /// Replaces the immediate field with a resolved value.
    pub(crate) fn set_immediate(&mut self, value: i64) {
        if let Some(imm) = self.operands.immediate_mut() {
            *imm = Immediate::Literal(value);
        }
    }

    /// True if the interpreter may execute this instruction.
    pub fn is_ready(&self) -> bool {
        self.assembled && self.unresolved_label().is_none()
    }
}
