//! General-Purpose Register File.
//!
//! This module implements the register file of the simulated machine. It performs the following:
//! 1. **Storage:** Maintains 32 signed integer registers (`r0`-`r31`).
//! 2. **Invariant Enforcement:** Register `r0` is hardwired to zero; writes to it are
//!    discarded and reported as warnings.
//! 3. **Observability:** Snapshot and iteration helpers for state dumps.

use serde::Serialize;

use super::constants::{REGISTER_COUNT, ZERO_REGISTER};
use super::diag::Diagnostics;

/// General-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [i64; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `r0` always returns 0.
    pub const fn read(&self, idx: usize) -> i64 {
        if idx == ZERO_REGISTER {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a register.
    ///
    /// A write to `r0` leaves it at zero and records exactly one warning.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - Value to write.
    /// * `log` - Warning sink for discarded writes.
    /// * `line` - Source line of the writing instruction, if known.
    ///
    /// # Returns
    ///
    /// `true` if the value was committed.
    pub fn write(
        &mut self,
        idx: usize,
        val: i64,
        log: &mut Diagnostics,
        line: Option<usize>,
    ) -> bool {
        if idx == ZERO_REGISTER {
            log.warn(
                line,
                format!("Register: r0 is hardwired to zero, write of {val} ignored"),
            );
            return false;
        }
        self.regs[idx] = val;
        true
    }

    /// Returns a copy of all 32 registers (`r0` reported as zero).
    pub const fn snapshot(&self) -> [i64; REGISTER_COUNT] {
        let mut out = self.regs;
        out[ZERO_REGISTER] = 0;
        out
    }

    /// Iterates over registers holding a non-zero value.
    pub fn non_zero(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.regs
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .filter(|&(_, v)| v != 0)
    }
}
