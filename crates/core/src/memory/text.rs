//! Instruction Store.
//!
//! Ordered instruction storage behind the instruction region. Placement appends and
//! assigns each instruction its address; fetch maps an address back to the instruction.

use serde::Serialize;

use crate::common::addr::Region;
use crate::common::error::AddressError;
use crate::isa::instruction::Instruction;

/// Backing storage of the instruction region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InstructionStore {
    instructions: Vec<Instruction>,
}

impl InstructionStore {
    /// Region this store backs.
    pub const REGION: Region = Region::TEXT;

    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Appends an instruction, assigning it the next address.
    ///
    /// # Returns
    ///
    /// The assigned address, or `None` when the store is full.
    pub fn push(&mut self, mut inst: Instruction) -> Option<u64> {
        if self.is_full() {
            return None;
        }
        let addr = self.next_address();
        inst.address = addr;
        self.instructions.push(inst);
        Some(addr)
    }

    /// Address the next placed instruction would receive.
    pub fn next_address(&self) -> u64 {
        Self::REGION.address_of(self.instructions.len())
    }

    /// Returns true once placement has filled every slot.
    pub fn is_full(&self) -> bool {
        self.instructions.len() >= Self::REGION.capacity()
    }

    /// Number of placed instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns the instruction at a slot index.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Iterates over placed instructions in address order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Mutable iteration, used by label resolution.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Instruction> {
        self.instructions.iter_mut()
    }

    /// Looks up the instruction at a fetch address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(inst))` - a placed instruction.
    /// * `Ok(None)` - the address is supported but past the last placed instruction.
    ///
    /// # Errors
    ///
    /// Returns an [`AddressError`] if the address is misaligned or outside backed storage.
    pub fn fetch(&self, pc: u64) -> Result<Option<&Instruction>, AddressError> {
        let index = Self::REGION.check(pc)?;
        Ok(self.instructions.get(index))
    }
}

impl<'a> IntoIterator for &'a InstructionStore {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
