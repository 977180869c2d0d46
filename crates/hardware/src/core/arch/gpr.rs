//! LEGv8 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 64-bit registers (`X0`-`X31`).
//! 2. **Invariant Enforcement:** Register `XZR` (`X31`) always reads as zero.
//! 3. **Validation:** Rejects register indices outside `0..=31`.

use crate::common::constants::{REG_COUNT, REG_ZERO};
use crate::common::error::{RegisterAccess, SimError, SimResult};

/// General-Purpose Register file.
///
/// Storage is uniform: `XZR` has a backing slot like any other register, and the
/// zero invariant is enforced in the read path only. Suppressing architectural writes
/// to `XZR` is the job of the write-back path (see [`crate::sim::Machine::write_back`]).
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    regs: [i64; REG_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    fn slot(idx: i32, access: RegisterAccess) -> SimResult<usize> {
        match usize::try_from(idx) {
            Ok(slot) if slot < REG_COUNT => Ok(slot),
            _ => Err(SimError::InvalidRegisterIndex { index: idx, access }),
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The stored value, or 0 for `XZR` regardless of what its slot holds.
    pub fn read(&self, idx: i32) -> SimResult<i64> {
        let slot = Self::slot(idx, RegisterAccess::Read)?;
        Ok(if slot == REG_ZERO { 0 } else { self.regs[slot] })
    }

    /// Writes a value to a general-purpose register.
    ///
    /// This is the low-level store: it writes the backing slot for every index,
    /// including `XZR`. Reads of `XZR` still return 0.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, idx: i32, val: i64) -> SimResult<()> {
        let slot = Self::slot(idx, RegisterAccess::Write)?;
        self.regs[slot] = val;
        Ok(())
    }

    /// Resets every register slot to zero.
    pub fn clear(&mut self) {
        self.regs = [0; REG_COUNT];
    }

    /// Returns the architectural value of every register, in index order.
    ///
    /// `XZR` is reported as 0. Used by the diagnostic renderers.
    pub fn snapshot(&self) -> [i64; REG_COUNT] {
        let mut out = self.regs;
        out[REG_ZERO] = 0;
        out
    }
}
