//! Main Execution Loop.
//!
//! This module drives one instruction through the six stages. A fatal error in any stage
//! aborts the instruction immediately; blocks already traced for it are kept.

use tracing::trace;

use super::Cpu;
use crate::common::error::ExecError;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, operand_stage, wb_stage,
};

impl Cpu {
    /// Executes the instruction at the current PC.
    ///
    /// Does nothing once the CPU has halted.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`ExecError`] raised by fetch (bad PC, unassembled instruction)
    /// or by the memory stage (bad data address).
    pub fn step(&mut self) -> Result<(), ExecError> {
        let Some(pc) = self.pc else {
            return Ok(());
        };
        self.steps += 1;
        trace!(step = self.steps, "executing at {pc:#010x}");

        let if_id = fetch_stage(self, pc)?;
        let id_rf = decode_stage(self, if_id);
        let rf_ex = operand_stage(self, id_rf);
        let ex_mem = execute_stage(self, rf_ex);
        let mem_wb = mem_stage(self, ex_mem)?;
        self.pc = wb_stage(self, mem_wb);
        Ok(())
    }
}
