//! Run statistics collection and reporting.
//!
//! This module tracks what a run executed. It provides:
//! 1. **Retirement:** Total instructions that completed write-back.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, other).
//! 3. **Branch outcomes:** Taken and not-taken counts.

use std::time::Instant;

use serde::Serialize;

use crate::isa::opcode::{Opcode, OperandFormat};

/// Run statistics.
#[derive(Clone, Debug, Serialize)]
pub struct RunStats {
    #[serde(skip)]
    start_time: Instant,
    /// Instructions that completed write-back.
    pub instructions_retired: u64,
    /// `add`, `sub`, `addi` retired.
    pub inst_alu: u64,
    /// `lw` retired.
    pub inst_load: u64,
    /// `sw` retired.
    pub inst_store: u64,
    /// Branches that redirected the PC.
    pub branches_taken: u64,
    /// Branches that fell through.
    pub branches_not_taken: u64,
    /// `j` and `jal` retired.
    pub inst_jump: u64,
    /// `nop`, `exit`, `halt` retired.
    pub inst_other: u64,
    /// Writes to `r0` that were discarded.
    pub discarded_writes: u64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            inst_jump: 0,
            inst_other: 0,
            discarded_writes: 0,
        }
    }
}

impl RunStats {
    /// Counts one retired instruction.
    ///
    /// `taken` is the branch outcome for branches and ignored otherwise.
    pub fn retire(&mut self, opcode: Opcode, taken: Option<bool>) {
        self.instructions_retired += 1;
        match opcode.format() {
            OperandFormat::Register | OperandFormat::ImmediateArith => self.inst_alu += 1,
            OperandFormat::Memory if opcode == Opcode::Lw => self.inst_load += 1,
            OperandFormat::Memory => self.inst_store += 1,
            OperandFormat::Branch if taken == Some(true) => self.branches_taken += 1,
            OperandFormat::Branch => self.branches_not_taken += 1,
            OperandFormat::Jump => self.inst_jump += 1,
            OperandFormat::None => self.inst_other += 1,
        }
    }

    /// Prints the statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let branches = self.branches_taken + self.branches_not_taken;
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                (n as f64 / self.instructions_retired as f64) * 100.0
            }
        };

        println!("\n==========================================================");
        println!("RUN STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  alu                    {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  load                   {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  store                  {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  branch                 {branches} ({:.2}%)", pct(branches));
        println!("    taken                {}", self.branches_taken);
        println!("    not_taken            {}", self.branches_not_taken);
        println!("  jump                   {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!("  other                  {} ({:.2}%)", self.inst_other, pct(self.inst_other));
        println!("----------------------------------------------------------");
        println!("r0_writes_discarded      {}", self.discarded_writes);
        println!("==========================================================");
    }
}
