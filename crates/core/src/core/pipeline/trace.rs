//! Execution trace.
//!
//! Every stage of every executed instruction appends one [`TraceBlock`] describing what it
//! read, computed and wrote. The trace is a value: it survives a fatal error, is compared
//! by tests and is serialized by the CLI.

use std::fmt;

use serde::Serialize;

use super::signals::{AluOp, ControlSignals};
use crate::isa::opcode::Opcode;

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Control-signal lookup.
    Decode,
    /// Register and immediate read.
    ReadOperands,
    /// ALU and target computation.
    Execute,
    /// Branch decision and data access.
    MemoryAccess,
    /// Register commit.
    WriteBack,
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Self; 6] = [
        Self::Fetch,
        Self::Decode,
        Self::ReadOperands,
        Self::Execute,
        Self::MemoryAccess,
        Self::WriteBack,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "Fetch",
            Self::Decode => "Decode",
            Self::ReadOperands => "Read-Operands",
            Self::Execute => "Execute",
            Self::MemoryAccess => "Memory-Access",
            Self::WriteBack => "Write-Back",
        };
        f.write_str(name)
    }
}

/// A data memory access performed by the memory stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemAccess {
    /// Value read from the data store.
    Load {
        /// Byte address.
        addr: i64,
        /// Value read.
        value: i64,
    },
    /// Value written to the data store.
    Store {
        /// Byte address.
        addr: i64,
        /// Value written.
        value: i64,
    },
}

/// What one stage did for one instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageReport {
    /// Fetch result.
    Fetch {
        /// Sequential next address.
        npc: u64,
        /// Disassembly of the fetched instruction.
        instruction: String,
        /// True if no instruction was placed here and an `exit` was synthesized.
        synthesized: bool,
    },
    /// Decode result.
    Decode {
        /// Decoded opcode.
        opcode: Opcode,
        /// Control-signal row.
        signals: ControlSignals,
    },
    /// Operand read.
    ReadOperands {
        /// First source register.
        rs: usize,
        /// Value of `rs`.
        rs_value: i64,
        /// Second source register, unless skipped because it is the destination.
        rt: Option<usize>,
        /// Value of `rt`.
        rt_value: Option<i64>,
        /// Immediate as fed to the datapath, word addresses already scaled.
        imm: Option<i64>,
    },
    /// ALU computation.
    Execute {
        /// ALU input 1.
        src1: i64,
        /// ALU input 2.
        src2: i64,
        /// ALU function.
        op: AluOp,
        /// ALU output.
        result: i64,
        /// Candidate jump or branch target.
        target: Option<u64>,
    },
    /// Branch decision and data access.
    MemoryAccess {
        /// Branch outcome, for branches only.
        taken: Option<bool>,
        /// Selected next PC.
        next_pc: u64,
        /// Load or store performed.
        access: Option<MemAccess>,
    },
    /// Register commit.
    WriteBack {
        /// Destination register, if any.
        dest: Option<usize>,
        /// Value offered for the destination.
        value: Option<i64>,
        /// False when the write targeted `r0` and was discarded.
        committed: bool,
        /// True for `exit`/`halt`, which end the run here.
        terminal: bool,
    },
}

impl StageReport {
    /// Stage that produced this report.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Fetch { .. } => Stage::Fetch,
            Self::Decode { .. } => Stage::Decode,
            Self::ReadOperands { .. } => Stage::ReadOperands,
            Self::Execute { .. } => Stage::Execute,
            Self::MemoryAccess { .. } => Stage::MemoryAccess,
            Self::WriteBack { .. } => Stage::WriteBack,
        }
    }
}

fn opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch {
                npc,
                instruction,
                synthesized,
            } => {
                write!(f, "    instruction: {instruction}")?;
                if *synthesized {
                    f.write_str(" (implicit)")?;
                }
                write!(f, "\n    npc: {npc:#010x}")
            }
            Self::Decode { opcode, signals } => write!(
                f,
                "    opcode: {opcode}\n    dest: {:?}  src1: {:?}  src2: {:?}  alu: {:?}\n    mem: {:?}  wb: {:?}  next-pc: {:?}  cond: {:?}",
                signals.dest,
                signals.src1,
                signals.src2,
                signals.alu,
                signals.mem,
                signals.wb,
                signals.next_pc,
                signals.cond
            ),
            Self::ReadOperands {
                rs,
                rs_value,
                rt,
                rt_value,
                imm,
            } => {
                write!(f, "    r{rs} = {rs_value}")?;
                if let (Some(rt), Some(v)) = (rt, rt_value) {
                    write!(f, "\n    r{rt} = {v}")?;
                }
                write!(f, "\n    imm = {}", opt(*imm))
            }
            Self::Execute {
                src1,
                src2,
                op,
                result,
                target,
            } => {
                write!(f, "    {op:?}({src1}, {src2}) = {result}")?;
                if let Some(t) = target {
                    write!(f, "\n    target: {t:#010x}")?;
                }
                Ok(())
            }
            Self::MemoryAccess {
                taken,
                next_pc,
                access,
            } => {
                if let Some(taken) = taken {
                    let outcome = if *taken { "taken" } else { "not taken" };
                    writeln!(f, "    branch {outcome}")?;
                }
                match access {
                    Some(MemAccess::Load { addr, value }) => {
                        writeln!(f, "    load [{addr:#010x}] -> {value}")?;
                    }
                    Some(MemAccess::Store { addr, value }) => {
                        writeln!(f, "    store {value} -> [{addr:#010x}]")?;
                    }
                    None => {}
                }
                write!(f, "    next-pc: {next_pc:#010x}")
            }
            Self::WriteBack {
                dest,
                value,
                committed,
                terminal,
            } => {
                if *terminal {
                    return f.write_str("    terminal: run ends");
                }
                match (dest, value) {
                    (Some(d), Some(v)) if *committed => write!(f, "    r{d} <- {v}"),
                    (Some(d), Some(v)) => write!(f, "    r{d} <- {v} (discarded)"),
                    _ => f.write_str("    no register written"),
                }
            }
        }
    }
}

/// One labelled block of the trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceBlock {
    /// 1-based index of the executed instruction.
    pub step: u64,
    /// Address of the instruction.
    pub pc: u64,
    /// Stage output.
    pub report: StageReport,
}

impl fmt::Display for TraceBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{}] {} @ {:#010x}",
            self.step,
            self.report.stage(),
            self.pc
        )?;
        write!(f, "{}", self.report)
    }
}

/// The full execution trace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    blocks: Vec<TraceBlock>,
}

impl Trace {
    /// Creates an empty trace.
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Appends a block.
    pub fn push(&mut self, step: u64, pc: u64, report: StageReport) {
        self.blocks.push(TraceBlock { step, pc, report });
    }

    /// All blocks in execution order.
    pub fn blocks(&self) -> &[TraceBlock] {
        &self.blocks
    }

    /// Blocks belonging to one executed instruction.
    pub fn step(&self, step: u64) -> impl Iterator<Item = &TraceBlock> + '_ {
        self.blocks.iter().filter(move |b| b.step == step)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if nothing was traced.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{block}")?;
        }
        Ok(())
    }
}
