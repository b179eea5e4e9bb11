//! Memory Access (MEM) Stage.
//!
//! Decides branches, selects the next PC and performs the data access of `lw` and `sw`
//! at the address computed by the ALU.

use crate::common::error::ExecError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::signals::{MemOp, NextPcSel};
use crate::core::pipeline::trace::{MemAccess, Stage, StageReport};
use crate::core::units::bru::BranchUnit;

/// Executes the memory access stage.
///
/// # Errors
///
/// Returns [`ExecError::Address`] if a load or store address is not a supported data
/// address. Nothing is written in that case.
pub fn mem_stage(cpu: &mut Cpu, entry: ExMem) -> Result<MemWb, ExecError> {
    let ctrl = entry.ctrl;
    let taken = (ctrl.next_pc == NextPcSel::Branch)
        .then(|| BranchUnit::taken(ctrl.cond, entry.alu_result));
    let next_pc = BranchUnit::next_pc(
        ctrl.next_pc,
        entry.npc,
        entry.target,
        taken.unwrap_or(false),
    );

    let addr = entry.alu_result;
    let fault = |source| ExecError::Address {
        stage: Stage::MemoryAccess,
        source,
    };
    let access = match ctrl.mem {
        MemOp::None => None,
        MemOp::Load => {
            let value = cpu.data.load(addr).map_err(fault)?;
            Some(MemAccess::Load { addr, value })
        }
        MemOp::Store => {
            cpu.data.store(addr, entry.rt_val).map_err(fault)?;
            Some(MemAccess::Store {
                addr,
                value: entry.rt_val,
            })
        }
    };

    cpu.record(
        entry.pc,
        StageReport::MemoryAccess {
            taken,
            next_pc,
            access,
        },
    );
    Ok(MemWb {
        pc: entry.pc,
        inst: entry.inst,
        ctrl,
        next_pc,
        taken,
        alu_result: entry.alu_result,
        load_value: match access {
            Some(MemAccess::Load { value, .. }) => Some(value),
            _ => None,
        },
    })
}
