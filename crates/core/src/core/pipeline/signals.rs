//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer one instruction through the datapath:
//! 1. **Destination Selection:** Which register (if any) write-back targets.
//! 2. **Operand Selection:** Sources for the two ALU inputs.
//! 3. **Operation:** The ALU function and the memory access kind.
//! 4. **Control Flow:** How the next PC is chosen and which branch condition applies.

use serde::Serialize;

/// Register written by write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DestSel {
    /// No register is written.
    #[default]
    None,
    /// The `rt` field (immediate-write formats).
    Target,
    /// The `rd` field (register format).
    Dest,
    /// Fixed link register `r31`.
    Link,
}

/// Source of ALU input 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Src1Sel {
    /// Value read from `rs`.
    #[default]
    Source1,
    /// Address of the sequentially next instruction.
    Npc,
}

/// Source of ALU input 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Src2Sel {
    /// Value read from `rt`.
    #[default]
    Source2,
    /// The instruction's immediate.
    Immediate,
}

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Bitwise XOR.
    Xor,

    /// Set less than (signed).
    Slt,

    /// Set less than or equal (signed).
    Sle,

    /// Passes input 1 through unchanged.
    Pass,
}

/// Data memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemOp {
    /// No access.
    #[default]
    None,
    /// Read the slot at the ALU result.
    Load,
    /// Write `rt` to the slot at the ALU result.
    Store,
}

/// Value committed by write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WbSel {
    /// The ALU result.
    #[default]
    Alu,
    /// The value loaded by the memory stage.
    Mem,
}

/// Next-PC selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextPcSel {
    /// `PC + 4`.
    #[default]
    Sequential,
    /// Absolute target `imm << 2`.
    Jump,
    /// `NPC + (imm << 2)` when the branch condition holds, else `NPC`.
    Branch,
}

/// Condition tested on the ALU result by a branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchCond {
    /// Not a branch.
    #[default]
    None,
    /// Taken when the ALU result is zero.
    Zero,
    /// Taken when the ALU result is non-zero.
    NonZero,
}

/// Control signals for one opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlSignals {
    /// Write-back destination.
    pub dest: DestSel,
    /// ALU input 1 source.
    pub src1: Src1Sel,
    /// ALU input 2 source.
    pub src2: Src2Sel,
    /// ALU function.
    pub alu: AluOp,
    /// Memory access kind.
    pub mem: MemOp,
    /// Write-back value source.
    pub wb: WbSel,
    /// Next-PC selection.
    pub next_pc: NextPcSel,
    /// Branch condition.
    pub cond: BranchCond,
}
