//! Instruction Decode (ID) Stage.
//!
//! Looks up the fixed control-signal row of the fetched opcode. Operands were validated at
//! assembly time, so decode cannot fail.

use crate::core::Cpu;
use crate::core::pipeline::control::control_for;
use crate::core::pipeline::latches::{IdRf, IfId};
use crate::core::pipeline::trace::StageReport;

/// Executes the decode stage.
pub fn decode_stage(cpu: &mut Cpu, entry: IfId) -> IdRf {
    let ctrl = control_for(entry.inst.opcode);
    cpu.record(
        entry.pc,
        StageReport::Decode {
            opcode: entry.inst.opcode,
            signals: ctrl,
        },
    );
    IdRf {
        pc: entry.pc,
        npc: entry.npc,
        inst: entry.inst,
        ctrl,
    }
}
