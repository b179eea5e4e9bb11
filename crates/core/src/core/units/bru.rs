//! Branch Resolution Unit (BRU).
//!
//! Computes candidate control-flow targets in Execute and decides branches in the
//! Memory-Access stage. There is no prediction: the next PC is always known exactly
//! before the following fetch.

use crate::common::addr::imm_to_addr;
use crate::core::pipeline::signals::{BranchCond, NextPcSel};

/// Stateless branch resolution helpers.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Candidate target for a control-flow instruction.
    ///
    /// Jumps are absolute (`imm << 2`); branches are relative to `npc`.
    /// Returns `None` for sequential instructions.
    pub const fn target(sel: NextPcSel, npc: u64, imm: i64) -> Option<u64> {
        match sel {
            NextPcSel::Sequential => None,
            NextPcSel::Jump => Some(imm_to_addr(imm) as u64),
            NextPcSel::Branch => Some(npc.wrapping_add_signed(imm_to_addr(imm))),
        }
    }

    /// Tests a branch condition against the ALU result.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::bru::BranchUnit;
    /// use mipsim_core::core::pipeline::signals::BranchCond;
    ///
    /// assert!(BranchUnit::taken(BranchCond::Zero, 0));
    /// assert!(BranchUnit::taken(BranchCond::NonZero, -1));
    /// assert!(!BranchUnit::taken(BranchCond::None, 0));
    /// ```
    pub const fn taken(cond: BranchCond, alu_result: i64) -> bool {
        match cond {
            BranchCond::None => false,
            BranchCond::Zero => alu_result == 0,
            BranchCond::NonZero => alu_result != 0,
        }
    }

    /// Chooses the next PC from the selector, the sequential address and the candidate.
    pub const fn next_pc(sel: NextPcSel, npc: u64, target: Option<u64>, taken: bool) -> u64 {
        match (sel, target) {
            (NextPcSel::Jump, Some(t)) => t,
            (NextPcSel::Branch, Some(t)) if taken => t,
            _ => npc,
        }
    }
}
