//! Resolution pass.
//!
//! Replaces every label reference with its immediate once placement has defined all
//! labels. Each instruction is visited even after failures so that one build reports
//! every unresolvable reference.
//!
//! | format          | region checked | immediate                  |
//! |-----------------|----------------|----------------------------|
//! | memory (bare)   | data           | `addr >> 2`                |
//! | jump            | instruction    | `addr >> 2`                |
//! | branch          | instruction    | `(addr - (pc + 4)) >> 2`   |

use tracing::debug;

use super::labels::LabelTable;
use crate::common::addr::{Region, addr_to_imm};
use crate::common::constants::{IMM16_MAX, IMM16_MIN, WORD_SIZE};
use crate::common::diag::Diagnostics;
use crate::isa::instruction::Instruction;
use crate::isa::opcode::OperandFormat;
use crate::memory::InstructionStore;

/// Resolves all label references in `text`, recording one error per failed reference.
pub fn resolve(text: &mut InstructionStore, labels: &LabelTable, log: &mut Diagnostics) {
    for inst in text.iter_mut() {
        let Some(label) = inst.unresolved_label().map(str::to_string) else {
            continue;
        };
        match label_immediate(inst, &label, labels) {
            Ok(imm) => {
                debug!(label = %label, imm, "resolved reference at {:#010x}", inst.address);
                inst.set_immediate(imm);
            }
            Err(message) => log.error(inst.line, message),
        }
    }
}

/// Computes the immediate that replaces `label` in `inst`.
fn label_immediate(inst: &Instruction, label: &str, labels: &LabelTable) -> Result<i64, String> {
    let addr = labels
        .get(label)
        .ok_or_else(|| format!("Label: \"{label}\" Not Found!"))?;

    let format = inst.opcode.format();
    let region = if format == OperandFormat::Memory {
        Region::DATA
    } else {
        Region::TEXT
    };
    let _ = region
        .check(addr)
        .map_err(|e| format!("Label: \"{label}\" {e}"))?;

    if format != OperandFormat::Branch {
        return Ok(addr_to_imm(addr as i64));
    }

    let npc = inst.address + WORD_SIZE;
    let offset = addr_to_imm(addr as i64 - npc as i64);
    if (IMM16_MIN..=IMM16_MAX).contains(&offset) {
        Ok(offset)
    } else {
        Err(format!(
            "Label: \"{label}\" branch offset {offset} Out Of Range [{IMM16_MIN}, {IMM16_MAX}]!"
        ))
    }
}
