//! Instruction Execute (EX) Stage.
//!
//! Selects the ALU inputs, runs the ALU and computes the candidate target of jumps
//! (`imm << 2`) and branches (`npc + (imm << 2)`).

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, RfEx};
use crate::core::pipeline::signals::{Src1Sel, Src2Sel};
use crate::core::pipeline::trace::StageReport;
use crate::core::units::alu::Alu;
use crate::core::units::bru::BranchUnit;

/// Executes the execute stage.
pub fn execute_stage(cpu: &mut Cpu, entry: RfEx) -> ExMem {
    let src1 = match entry.ctrl.src1 {
        Src1Sel::Source1 => entry.rs_val,
        Src1Sel::Npc => entry.npc as i64,
    };
    let src2 = match entry.ctrl.src2 {
        Src2Sel::Source2 => entry.rt_val,
        Src2Sel::Immediate => entry.imm,
    };
    let alu_result = Alu::execute(entry.ctrl.alu, src1, src2);
    let target = BranchUnit::target(entry.ctrl.next_pc, entry.npc, entry.imm);

    cpu.record(
        entry.pc,
        StageReport::Execute {
            src1,
            src2,
            op: entry.ctrl.alu,
            result: alu_result,
            target,
        },
    );
    ExMem {
        pc: entry.pc,
        npc: entry.npc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        rt_val: entry.rt_val,
        alu_result,
        target,
    }
}
