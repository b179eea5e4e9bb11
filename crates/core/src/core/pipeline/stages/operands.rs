//! Read-Operands (RF) Stage.
//!
//! Reads the two source registers and captures the immediate. The second source is not
//! read when it is the destination (`addi`, `lw`). Word-scaled memory immediates are
//! turned into byte addresses here, so Execute only ever sees byte values.

use crate::common::addr::imm_to_addr;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IdRf, RfEx};
use crate::core::pipeline::signals::DestSel;
use crate::core::pipeline::trace::StageReport;
use crate::isa::instruction::{ImmMode, Operands};

/// Executes the operand read stage.
pub fn operand_stage(cpu: &mut Cpu, entry: IdRf) -> RfEx {
    let (rs, rt) = entry.inst.operands.sources();
    let rs_val = cpu.regs.read(rs);
    let rt_read = (entry.ctrl.dest != DestSel::Target).then(|| (rt, cpu.regs.read(rt)));

    let imm = match &entry.inst.operands {
        Operands::Immediate { imm, mode, .. } => imm.literal().map(|v| match mode {
            ImmMode::Plain => v,
            ImmMode::WordAddress => imm_to_addr(v),
        }),
        Operands::Jump { target } => target.literal(),
        Operands::None | Operands::Register { .. } => None,
    };

    cpu.record(
        entry.pc,
        StageReport::ReadOperands {
            rs,
            rs_value: rs_val,
            rt: rt_read.map(|(r, _)| r),
            rt_value: rt_read.map(|(_, v)| v),
            imm,
        },
    );
    RfEx {
        pc: entry.pc,
        npc: entry.npc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        rs_val,
        rt_val: rt_read.map_or(0, |(_, v)| v),
        imm: imm.unwrap_or(0),
    }
}
