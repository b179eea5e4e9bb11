//! Label Table.
//!
//! Maps label names to the address of the item they were attached to during placement.
//! Backed by a `BTreeMap`, so iteration is sorted by name and identical across runs.

use std::collections::BTreeMap;

use serde::Serialize;

/// Resolved label addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelTable {
    entries: BTreeMap<String, u64>,
}

impl LabelTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Defines a label.
    ///
    /// # Returns
    ///
    /// `false` if the name was already defined; the existing address is kept.
    pub fn define(&mut self, name: &str, addr: u64) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        let _ = self.entries.insert(name.to_string(), addr);
        true
    }

    /// Returns true if `name` has been defined.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Looks up a label's address.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    /// Iterates over `(name, address)` sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of defined labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no label is defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
