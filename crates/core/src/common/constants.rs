//! Global System Constants.
//!
//! This module defines the fixed architectural constants of the simulated machine. It includes:
//! 1. **Address Layout:** Base, supported and valid bounds of the instruction and data regions.
//! 2. **Storage Limits:** Capacities of the instruction and data stores.
//! 3. **Register File:** Register count and the hardwired/link register indices.
//! 4. **Immediates:** Ranges of the 16-bit signed and 26-bit unsigned immediate fields.

/// Base address of the instruction (text) region.
pub const TEXT_BASE: u64 = 0x0040_0000;

/// First instruction address past the backed instruction storage.
pub const TEXT_SUPPORTED_END: u64 = 0x0050_0000;

/// First address past the architecturally valid instruction region.
pub const TEXT_VALID_END: u64 = 0x1000_0000;

/// Size of one instruction slot in bytes (word aligned).
pub const WORD_SIZE: u64 = 4;

/// Base address of the data region.
pub const DATA_BASE: u64 = 0x1001_0000;

/// First data address past the backed data storage (256 double words).
pub const DATA_SUPPORTED_END: u64 = 0x1001_0800;

/// First address past the architecturally valid data region.
pub const DATA_VALID_END: u64 = 0x1004_0000;

/// Size of one data slot in bytes (double-word aligned).
pub const DOUBLE_WORD_SIZE: u64 = 8;

/// Maximum number of items either store accepts during placement.
pub const STORE_CAPACITY: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 32;

/// Register hardwired to zero.
pub const ZERO_REGISTER: usize = 0;

/// Register written by `jal` with the return address.
pub const LINK_REGISTER: usize = 31;

/// Smallest value of a signed 16-bit immediate.
pub const IMM16_MIN: i64 = -32_768;

/// Largest value of a signed 16-bit immediate.
pub const IMM16_MAX: i64 = 32_767;

/// Largest value of an unsigned 26-bit jump immediate.
pub const IMM26_MAX: i64 = 67_108_863;

/// Shift converting between byte addresses and word immediates.
pub const IMM_SHIFT: u32 = 2;
