//! Data Store.
//!
//! Sparse double-word storage behind the data region. Placement appends values at the
//! next free slot; the interpreter loads and stores at arbitrary supported addresses.
//! Slots that were never written read as zero.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::addr::Region;
use crate::common::error::AddressError;

/// Backing storage of the data region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DataStore {
    slots: BTreeMap<usize, i64>,
    placed: usize,
}

impl DataStore {
    /// Region this store backs.
    pub const REGION: Region = Region::DATA;

    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            placed: 0,
        }
    }

    /// Appends a value at the next free slot.
    ///
    /// # Returns
    ///
    /// The address the value was placed at, or `None` when the store is full. A full store
    /// is left untouched.
    pub fn push(&mut self, value: i64) -> Option<u64> {
        if self.placed >= Self::REGION.capacity() {
            return None;
        }
        let index = self.placed;
        let _ = self.slots.insert(index, value);
        self.placed += 1;
        Some(Self::REGION.address_of(index))
    }

    /// Number of values appended by placement.
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Address the next placed value would receive.
    pub const fn next_address(&self) -> u64 {
        Self::REGION.address_of(self.placed)
    }

    /// Returns true once placement has filled every slot.
    pub const fn is_full(&self) -> bool {
        self.placed >= Self::REGION.capacity()
    }

    /// Reads the slot at `index`; unset slots read zero.
    pub fn get(&self, index: usize) -> i64 {
        self.slots.get(&index).copied().unwrap_or(0)
    }

    /// Loads the value at a datapath address.
    ///
    /// # Errors
    ///
    /// Returns an [`AddressError`] if `addr` is not a supported data address.
    pub fn load(&self, addr: i64) -> Result<i64, AddressError> {
        let index = Self::REGION.check_value(addr)?;
        Ok(self.get(index))
    }

    /// Stores a value at a datapath address.
    ///
    /// # Errors
    ///
    /// Returns an [`AddressError`] if `addr` is not a supported data address. Nothing is
    /// written in that case.
    pub fn store(&mut self, addr: i64, value: i64) -> Result<(), AddressError> {
        let index = Self::REGION.check_value(addr)?;
        let _ = self.slots.insert(index, value);
        Ok(())
    }

    /// Iterates over written slots as `(address, value)` in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, i64)> + '_ {
        self.slots
            .iter()
            .map(|(&index, &value)| (Self::REGION.address_of(index), value))
    }
}
