//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entries carried between the six stages:
//! Fetch → Decode → Read-Operands → Execute → Memory-Access → Write-Back.
//!
//! Exactly one instruction is in flight at a time, so each latch holds a single entry
//! that the next stage consumes by value.

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Instruction;

/// Fetch to Decode.
#[derive(Clone, Debug)]
pub struct IfId {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Sequential next address (`pc + 4`).
    pub npc: u64,
    /// The fetched instruction.
    pub inst: Instruction,
}

/// Decode to Read-Operands.
#[derive(Clone, Debug)]
pub struct IdRf {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Sequential next address.
    pub npc: u64,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Read-Operands to Execute.
#[derive(Clone, Debug)]
pub struct RfEx {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Sequential next address.
    pub npc: u64,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// Value read from `rs`.
    pub rs_val: i64,
    /// Value read from `rt`; zero when the read was skipped.
    pub rt_val: i64,
    /// Immediate as fed to the datapath.
    pub imm: i64,
}

/// Execute to Memory-Access.
#[derive(Clone, Debug)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Sequential next address.
    pub npc: u64,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// Value of `rt`, stored by `sw`.
    pub rt_val: i64,
    /// ALU output.
    pub alu_result: i64,
    /// Candidate jump or branch target.
    pub target: Option<u64>,
}

/// Memory-Access to Write-Back.
#[derive(Clone, Debug)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u64,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// Selected next PC.
    pub next_pc: u64,
    /// Branch outcome, for branches only.
    pub taken: Option<bool>,
    /// ALU output.
    pub alu_result: i64,
    /// Value read by a load.
    pub load_value: Option<i64>,
}
