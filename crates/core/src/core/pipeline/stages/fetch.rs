//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads the
//! instruction at the PC from the instruction store and computes the sequential next
//! address. Fetching the first supported address past the last placed instruction
//! executes an implicit `exit` with a warning instead of failing.

use crate::common::constants::WORD_SIZE;
use crate::common::error::ExecError;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfId;
use crate::core::pipeline::trace::{Stage, StageReport};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `pc` - Address to fetch from
///
/// # Errors
///
/// * [`ExecError::Address`] if `pc` is misaligned or outside the supported region.
/// * [`ExecError::NotAssembled`] / [`ExecError::Unresolved`] if the instruction is not
///   executable.
pub fn fetch_stage(cpu: &mut Cpu, pc: u64) -> Result<IfId, ExecError> {
    let fetched = cpu.text.fetch(pc).map_err(|source| ExecError::Address {
        stage: Stage::Fetch,
        source,
    })?;

    let (inst, synthesized) = if let Some(inst) = fetched {
        if let Some(label) = inst.unresolved_label() {
            return Err(ExecError::Unresolved {
                pc,
                label: label.to_string(),
            });
        }
        if !inst.is_assembled() {
            return Err(ExecError::NotAssembled { pc });
        }
        (inst.clone(), false)
    } else {
        cpu.warnings.warn(
            None,
            format!("Fetch: no instruction placed at {pc:#010x}, executing implicit exit"),
        );
        (Instruction::synthesized_exit(pc), true)
    };

    let npc = pc + WORD_SIZE;
    cpu.record(
        pc,
        StageReport::Fetch {
            npc,
            instruction: disassemble(&inst),
            synthesized,
        },
    );
    Ok(IfId { pc, npc, inst })
}
