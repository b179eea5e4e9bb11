//! Address-Space Regions.
//!
//! This module models the two regions of the simulated address space. It provides the following:
//! 1. **Region Layout:** Base, element size, supported bound and valid bound per region.
//! 2. **Classification:** Sorting any address into supported, valid-but-unsupported,
//!    misaligned or out-of-range, each with its own diagnostic.
//! 3. **Index Mapping:** Conversion between byte addresses and storage slot indices.
//! 4. **Immediate Mapping:** Conversion between byte addresses and word immediates.

use std::fmt;

use serde::Serialize;

use super::constants::{
    DATA_BASE, DATA_SUPPORTED_END, DATA_VALID_END, DOUBLE_WORD_SIZE, IMM_SHIFT, STORE_CAPACITY,
    TEXT_BASE, TEXT_SUPPORTED_END, TEXT_VALID_END, WORD_SIZE,
};
use super::error::AddressError;

/// Identifies which region an address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Instruction (text) region.
    Text,
    /// Data region.
    Data,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("instruction"),
            Self::Data => f.write_str("data"),
        }
    }
}

/// Outcome of classifying an address against a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressClass {
    /// Inside backed storage and aligned to the element size.
    Supported,
    /// Architecturally addressable but not backed by storage.
    Unsupported,
    /// Inside backed storage but not aligned to the element size.
    Misaligned,
    /// Outside the region entirely.
    OutOfRange,
}

/// One region of the simulated address space.
///
/// The invariant `base <= supported_end <= valid_end` holds for both predefined regions,
/// and every supported address is a whole number of elements away from `base`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    kind: RegionKind,
    base: u64,
    element_size: u64,
    supported_end: u64,
    valid_end: u64,
    capacity: usize,
}

impl Region {
    /// Instruction region: word aligned, backed up to `0x00500000`.
    pub const TEXT: Self = Self {
        kind: RegionKind::Text,
        base: TEXT_BASE,
        element_size: WORD_SIZE,
        supported_end: TEXT_SUPPORTED_END,
        valid_end: TEXT_VALID_END,
        capacity: STORE_CAPACITY,
    };

    /// Data region: double-word aligned, backed for 256 slots.
    pub const DATA: Self = Self {
        kind: RegionKind::Data,
        base: DATA_BASE,
        element_size: DOUBLE_WORD_SIZE,
        supported_end: DATA_SUPPORTED_END,
        valid_end: DATA_VALID_END,
        capacity: STORE_CAPACITY,
    };

    /// Returns which region this is.
    pub const fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Returns the first address of the region.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Returns the size of one slot in bytes.
    pub const fn element_size(&self) -> u64 {
        self.element_size
    }

    /// Returns the first address past backed storage.
    pub const fn supported_end(&self) -> u64 {
        self.supported_end
    }

    /// Returns the first address past the architectural region.
    pub const fn valid_end(&self) -> u64 {
        self.valid_end
    }

    /// Returns how many items placement may put into this region.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Classifies an address against this region.
    ///
    /// The valid-but-unsupported band is reported regardless of alignment; alignment is
    /// only meaningful where storage exists.
    pub const fn classify(&self, addr: u64) -> AddressClass {
        if addr >= self.supported_end && addr < self.valid_end {
            AddressClass::Unsupported
        } else if addr >= self.base && addr < self.supported_end {
            if (addr - self.base) % self.element_size == 0 {
                AddressClass::Supported
            } else {
                AddressClass::Misaligned
            }
        } else {
            AddressClass::OutOfRange
        }
    }

    /// Returns true if the address is backed and aligned.
    pub const fn is_supported(&self, addr: u64) -> bool {
        matches!(self.classify(addr), AddressClass::Supported)
    }

    /// Validates an address and converts it to a slot index.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address to check.
    ///
    /// # Returns
    ///
    /// The zero-based slot index.
    ///
    /// # Errors
    ///
    /// Returns the [`AddressError`] matching the address class when it is not supported.
    pub const fn check(&self, addr: u64) -> Result<usize, AddressError> {
        match self.classify(addr) {
            AddressClass::Supported => Ok(((addr - self.base) / self.element_size) as usize),
            AddressClass::Unsupported => Err(AddressError::Unsupported {
                region: self.kind,
                addr,
                end: self.supported_end,
            }),
            AddressClass::Misaligned => Err(AddressError::Misaligned {
                region: self.kind,
                addr,
                align: self.element_size,
            }),
            AddressClass::OutOfRange => Err(AddressError::OutOfRange {
                region: self.kind,
                addr: addr as i64,
                base: self.base,
                end: self.valid_end,
            }),
        }
    }

    /// Validates a signed datapath value as an address in this region.
    ///
    /// Negative values can come out of the ALU and are always out of range.
    ///
    /// # Errors
    ///
    /// See [`Region::check`].
    pub fn check_value(&self, value: i64) -> Result<usize, AddressError> {
        let addr = u64::try_from(value).map_err(|_| AddressError::OutOfRange {
            region: self.kind,
            addr: value,
            base: self.base,
            end: self.valid_end,
        })?;
        self.check(addr)
    }

    /// Returns the byte address of a slot index.
    pub const fn address_of(&self, index: usize) -> u64 {
        self.base + index as u64 * self.element_size
    }
}

/// Converts a word immediate into a byte address (`imm << 2`).
pub const fn imm_to_addr(imm: i64) -> i64 {
    imm << IMM_SHIFT
}

/// Converts a byte address into a word immediate (`addr >> 2`, arithmetic).
pub const fn addr_to_imm(addr: i64) -> i64 {
    addr >> IMM_SHIFT
}
