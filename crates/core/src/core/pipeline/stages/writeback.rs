//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits the
//! selected value to the destination register, retires the instruction into the run
//! statistics and produces the PC for the next instruction. Terminal opcodes produce no
//! next PC, which ends the run.

use crate::common::constants::LINK_REGISTER;
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWb;
use crate::core::pipeline::signals::{DestSel, WbSel};
use crate::core::pipeline::trace::StageReport;
use crate::isa::instruction::Operands;

/// Register selected by `sel` for the given operands.
const fn destination(sel: DestSel, operands: &Operands) -> Option<usize> {
    match (sel, operands) {
        (DestSel::Target, Operands::Immediate { rt, .. }) => Some(*rt),
        (DestSel::Dest, Operands::Register { rd, .. }) => Some(*rd),
        (DestSel::Link, _) => Some(LINK_REGISTER),
        _ => None,
    }
}

/// Executes the writeback stage.
///
/// # Returns
///
/// The next PC, or `None` if the instruction was terminal.
pub fn wb_stage(cpu: &mut Cpu, entry: MemWb) -> Option<u64> {
    let opcode = entry.inst.opcode;
    cpu.stats.retire(opcode, entry.taken);

    if opcode.is_terminal() {
        cpu.record(
            entry.pc,
            StageReport::WriteBack {
                dest: None,
                value: None,
                committed: false,
                terminal: true,
            },
        );
        return None;
    }

    let value = match entry.ctrl.wb {
        WbSel::Alu => entry.alu_result,
        WbSel::Mem => entry.load_value.unwrap_or(0),
    };
    let dest = destination(entry.ctrl.dest, &entry.inst.operands);
    let committed = dest.is_some_and(|rd| {
        cpu.regs
            .write(rd, value, &mut cpu.warnings, entry.inst.line)
    });
    if dest.is_some() && !committed {
        cpu.stats.discarded_writes += 1;
    }

    cpu.record(
        entry.pc,
        StageReport::WriteBack {
            dest,
            value: dest.map(|_| value),
            committed,
            terminal: false,
        },
    );
    Some(entry.next_pc)
}
