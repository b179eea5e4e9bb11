//! Control-signal table.
//!
//! One fixed row per opcode, matched exhaustively so that adding an opcode without a row
//! fails to compile.

use super::signals::{
    AluOp, BranchCond, ControlSignals, DestSel, MemOp, NextPcSel, Src1Sel, Src2Sel, WbSel,
};
use crate::isa::opcode::Opcode;

/// Row shared by opcodes that do nothing in the datapath.
const PASS: ControlSignals = ControlSignals {
    dest: DestSel::None,
    src1: Src1Sel::Source1,
    src2: Src2Sel::Source2,
    alu: AluOp::Pass,
    mem: MemOp::None,
    wb: WbSel::Alu,
    next_pc: NextPcSel::Sequential,
    cond: BranchCond::None,
};

const fn branch(alu: AluOp, cond: BranchCond) -> ControlSignals {
    ControlSignals {
        alu,
        next_pc: NextPcSel::Branch,
        cond,
        ..PASS
    }
}

/// Returns the control signals for `opcode`.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::pipeline::control::control_for;
/// use mipsim_core::core::pipeline::signals::{DestSel, MemOp};
/// use mipsim_core::isa::Opcode;
///
/// let row = control_for(Opcode::Lw);
/// assert_eq!(row.dest, DestSel::Target);
/// assert_eq!(row.mem, MemOp::Load);
/// ```
pub const fn control_for(opcode: Opcode) -> ControlSignals {
    match opcode {
        Opcode::Add => ControlSignals {
            dest: DestSel::Dest,
            alu: AluOp::Add,
            ..PASS
        },
        Opcode::Sub => ControlSignals {
            dest: DestSel::Dest,
            alu: AluOp::Sub,
            ..PASS
        },
        Opcode::Addi => ControlSignals {
            dest: DestSel::Target,
            src2: Src2Sel::Immediate,
            alu: AluOp::Add,
            ..PASS
        },
        Opcode::Lw => ControlSignals {
            dest: DestSel::Target,
            src2: Src2Sel::Immediate,
            alu: AluOp::Add,
            mem: MemOp::Load,
            wb: WbSel::Mem,
            ..PASS
        },
        Opcode::Sw => ControlSignals {
            src2: Src2Sel::Immediate,
            alu: AluOp::Add,
            mem: MemOp::Store,
            ..PASS
        },
        Opcode::Beq => branch(AluOp::Sub, BranchCond::Zero),
        Opcode::Bne => branch(AluOp::Sub, BranchCond::NonZero),
        Opcode::Blt => branch(AluOp::Slt, BranchCond::NonZero),
        Opcode::Bge => branch(AluOp::Slt, BranchCond::Zero),
        Opcode::Bgt => branch(AluOp::Sle, BranchCond::Zero),
        Opcode::Ble => branch(AluOp::Sle, BranchCond::NonZero),
        Opcode::J => ControlSignals {
            src2: Src2Sel::Immediate,
            next_pc: NextPcSel::Jump,
            ..PASS
        },
        Opcode::Jal => ControlSignals {
            dest: DestSel::Link,
            src1: Src1Sel::Npc,
            src2: Src2Sel::Immediate,
            next_pc: NextPcSel::Jump,
            ..PASS
        },
        Opcode::Exit | Opcode::Halt | Opcode::Nop => PASS,
    }
}
