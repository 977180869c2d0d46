//! Data Memory.
//!
//! This module implements the machine's data memory. It provides:
//! 1. **Sparse Storage:** Word values keyed by byte address; only written addresses occupy space.
//! 2. **Lazy Zero:** Any address never written reads as 0.
//! 3. **Validation:** Negative addresses are rejected. Alignment is the caller's concern.
//! 4. **Observability:** An address-ordered snapshot for diagnostic dumps.

use std::collections::BTreeMap;

use crate::common::error::{SimError, SimResult};

/// Sparse, word-valued, byte-addressed data memory.
///
/// Each key holds one 64-bit word. Keys are exact addresses: a word written at
/// address 8 is not visible at address 9. Word alignment is not enforced here.
#[derive(Clone, Debug, Default)]
pub struct DataMemory {
    words: BTreeMap<i64, i64>,
}

impl DataMemory {
    /// Creates an empty memory in which every address reads as 0.
    pub fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    fn check(address: i64) -> SimResult<()> {
        if address < 0 {
            Err(SimError::NegativeAddress { address })
        } else {
            Ok(())
        }
    }

    /// Reads the word stored at `address`.
    ///
    /// # Arguments
    ///
    /// * `address` - Byte address (must be non-negative).
    ///
    /// # Returns
    ///
    /// The stored word, or 0 if the address was never written.
    pub fn read(&self, address: i64) -> SimResult<i64> {
        Self::check(address)?;
        Ok(self.words.get(&address).copied().unwrap_or(0))
    }

    /// Stores `value` at `address`, replacing any previous word.
    ///
    /// # Arguments
    ///
    /// * `address` - Byte address (must be non-negative).
    /// * `value` - The 64-bit word to store.
    pub fn write(&mut self, address: i64, value: i64) -> SimResult<()> {
        Self::check(address)?;
        let _ = self.words.insert(address, value);
        Ok(())
    }

    /// Removes every stored word; all addresses read as 0 afterwards.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Returns every stored `(address, value)` pair in ascending address order.
    ///
    /// Entries holding 0 are included if they were written explicitly.
    pub fn snapshot(&self) -> Vec<(i64, i64)> {
        self.words.iter().map(|(&a, &v)| (a, v)).collect()
    }

    /// Number of addresses that have been written since the last clear.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing has been written since the last clear.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
