//! Common utilities and types used throughout the toolchain.
//!
//! This module provides fundamental building blocks shared by the assembler and the
//! interpreter. It includes:
//! 1. **Address Regions:** The instruction and data regions with their bounds.
//! 2. **Constants:** Address layout, capacities and immediate ranges.
//! 3. **Diagnostics:** Line-numbered error and warning logs.
//! 4. **Error Handling:** Address, execution and build error types.
//! 5. **Register File:** 32 registers with `r0` hardwired to zero.

/// Address-space regions and address/immediate conversion.
pub mod addr;

/// Architectural constants.
pub mod constants;

/// Error and warning logs.
pub mod diag;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::{AddressClass, Region, RegionKind, addr_to_imm, imm_to_addr};
pub use diag::{Diagnostic, Diagnostics};
pub use error::{AddressError, BuildError, ExecError};
pub use reg::RegisterFile;
