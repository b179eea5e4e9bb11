//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state during a run. It coordinates the following:
//! 1. **State Management:** Maintains registers and the program counter.
//! 2. **Storage:** Owns the instruction and data stores handed over by the assembler.
//! 3. **Observability:** Collects runtime warnings, the execution trace and statistics.

/// Instruction execution orchestration.
pub mod execution;

use serde::Serialize;

use crate::asm::Program;
use crate::common::RegisterFile;
use crate::common::constants::TEXT_BASE;
use crate::common::diag::Diagnostics;
use crate::config::Config;
use crate::core::pipeline::trace::{StageReport, Trace};
use crate::memory::{DataStore, InstructionStore};
use crate::stats::RunStats;

/// Main CPU structure containing all machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program Counter; `None` once a terminal instruction has retired.
    pub pc: Option<u64>,
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Instruction region contents.
    pub text: InstructionStore,
    /// Data region contents.
    pub data: DataStore,
    /// Runtime warnings (discarded `r0` writes, implicit exit).
    pub warnings: Diagnostics,
    /// Execution trace.
    pub trace: Trace,
    /// Run statistics.
    pub stats: RunStats,
    /// Record trace blocks.
    pub trace_enabled: bool,
    /// Instructions started so far (1-based index of the current one).
    pub steps: u64,
}

/// Serializable snapshot of the architectural state after a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineState {
    /// Final program counter.
    pub pc: Option<u64>,
    /// Non-zero registers as `(index, value)`.
    pub registers: Vec<(usize, i64)>,
    /// Written data slots as `(address, value)`.
    pub memory: Vec<(u64, i64)>,
}

impl Cpu {
    /// Creates a CPU loaded with an assembled program, PC at the instruction base.
    ///
    /// # Arguments
    ///
    /// * `program` - Output of a successful assembly.
    /// * `config` - Run configuration.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            pc: Some(TEXT_BASE),
            regs: RegisterFile::new(),
            text: program.text,
            data: program.data,
            warnings: Diagnostics::new(),
            trace: Trace::new(),
            stats: RunStats::default(),
            trace_enabled: config.general.trace,
            steps: 0,
        }
    }

    /// Returns true once a terminal instruction has retired.
    pub const fn is_halted(&self) -> bool {
        self.pc.is_none()
    }

    /// Appends a trace block for the current instruction.
    pub(crate) fn record(&mut self, pc: u64, report: StageReport) {
        if self.trace_enabled {
            self.trace.push(self.steps, pc, report);
        }
    }

    /// Captures the architectural state for dumps and JSON output.
    pub fn state(&self) -> MachineState {
        MachineState {
            pc: self.pc,
            registers: self.regs.non_zero().collect(),
            memory: self.data.iter().collect(),
        }
    }
}
