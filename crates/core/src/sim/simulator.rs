//! Simulator: owns the CPU and drives it to completion.
//!
//! The simulator enforces the configured step limit and hands back everything a caller
//! may want to report: the trace, the final state, warnings from both the build and the
//! run, and statistics. A fatal error leaves all of it in place.

use tracing::{debug, info};

use crate::asm::Program;
use crate::common::diag::Diagnostics;
use crate::common::error::ExecError;
use crate::config::Config;
use crate::core::Cpu;

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU state (registers, stores, trace, stats).
    pub cpu: Cpu,
    /// Warnings recorded while assembling the program.
    pub build_warnings: Diagnostics,
    max_steps: u64,
}

impl Simulator {
    /// Creates a simulator for an assembled program.
    pub fn new(program: Program, config: &Config) -> Self {
        let build_warnings = program.diagnostics.clone();
        Self {
            cpu: Cpu::new(program, config),
            build_warnings,
            max_steps: config.general.max_steps,
        }
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::StepLimit`] if the configured limit has already been reached,
    /// or any fatal error raised by the pipeline.
    pub fn step(&mut self) -> Result<(), ExecError> {
        if self.cpu.steps >= self.max_steps {
            return Err(ExecError::StepLimit(self.max_steps));
        }
        self.cpu.step()
    }

    /// Runs until a terminal instruction retires.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error. The trace and state up to that point stay available
    /// through [`Simulator::cpu`].
    pub fn run(&mut self) -> Result<(), ExecError> {
        while !self.cpu.is_halted() {
            if let Err(e) = self.step() {
                debug!(step = self.cpu.steps, "run aborted: {e}");
                return Err(e);
            }
        }
        info!(
            retired = self.cpu.stats.instructions_retired,
            warnings = self.cpu.warnings.warning_count(),
            "run completed"
        );
        Ok(())
    }

    /// Returns true once a terminal instruction has retired.
    pub const fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }
}
