//! Error definitions.
//!
//! This module defines the error types of the toolchain. It provides:
//! 1. **Address Errors:** Distinct diagnostics for misaligned, unbacked and out-of-range
//!    addresses in either region.
//! 2. **Execution Errors:** Fatal runtime faults that abort a run immediately.
//! 3. **Build Errors:** Refusal to produce a program when the error log is non-empty.
//!
//! Recoverable validation problems are never errors in this sense; they are accumulated
//! in a [`Diagnostics`] log instead.

use thiserror::Error;

use super::addr::RegionKind;
use super::diag::Diagnostics;
use crate::core::pipeline::trace::Stage;

/// An address rejected by a region check.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Address inside backed storage but not aligned to the element size.
    #[error("{region} address {addr:#010x} is not aligned to {align} bytes")]
    Misaligned {
        /// Region the address was checked against.
        region: RegionKind,
        /// Offending address.
        addr: u64,
        /// Required alignment in bytes.
        align: u64,
    },

    /// Address architecturally valid but past backed storage.
    #[error("{region} address {addr:#010x} is valid but not supported (storage ends at {end:#010x})")]
    Unsupported {
        /// Region the address was checked against.
        region: RegionKind,
        /// Offending address.
        addr: u64,
        /// First unbacked address of the region.
        end: u64,
    },

    /// Address outside the region altogether.
    #[error("{region} address {addr:#010x} is outside the valid range [{base:#010x}, {end:#010x})")]
    OutOfRange {
        /// Region the address was checked against.
        region: RegionKind,
        /// Offending address; negative when it came out of the ALU.
        addr: i64,
        /// First address of the region.
        base: u64,
        /// First address past the valid region.
        end: u64,
    },
}

/// Fatal runtime fault. Aborts the current instruction and the whole run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// An instruction or data address failed its region check.
    #[error("{stage}: {source}")]
    Address {
        /// Pipeline stage that performed the access.
        stage: Stage,
        /// The rejected address.
        #[source]
        source: AddressError,
    },

    /// The fetched instruction never went through a successful assembly.
    #[error("instruction at {pc:#010x} was never assembled")]
    NotAssembled {
        /// Address of the instruction.
        pc: u64,
    },

    /// The fetched instruction still refers to a label.
    #[error("instruction at {pc:#010x} still refers to unresolved label \"{label}\"")]
    Unresolved {
        /// Address of the instruction.
        pc: u64,
        /// The label that was never resolved.
        label: String,
    },

    /// The configured maximum number of executed instructions was reached.
    #[error("step limit of {0} instructions reached without a terminal instruction")]
    StepLimit(u64),
}

/// Assembly refused because at least one error was recorded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("assembly failed with {} error(s)", .diagnostics.error_count())]
pub struct BuildError {
    /// Every error and warning recorded across both passes.
    pub diagnostics: Diagnostics,
}
