//! Diagnostic rendering of machine state.
//!
//! Produces the fixed-width hexadecimal listings used when inspecting a machine:
//! 1. **Registers:** Two-column listing with `SP` and `XZR` aliases.
//! 2. **Memory:** One line per stored word, filtered by [`DumpConfig`].

use std::borrow::Cow;
use std::fmt;

use crate::common::constants::{REG_COUNT, REG_SP, REG_ZERO, WORD_BYTES};
use crate::config::DumpConfig;
use crate::core::arch::gpr::RegisterFile;
use crate::soc::memory::DataMemory;

/// Returns the name a dump uses for register `idx`.
///
/// # Examples
///
/// ```
/// use legv8_core::sim::dump::register_name;
///
/// assert_eq!(register_name(0), "X0");
/// assert_eq!(register_name(28), "SP");
/// assert_eq!(register_name(31), "XZR");
/// ```
pub fn register_name(idx: usize) -> Cow<'static, str> {
    match idx {
        REG_SP => Cow::Borrowed("SP"),
        REG_ZERO => Cow::Borrowed("XZR"),
        n => Cow::Owned(format!("X{n}")),
    }
}

/// Two-column register listing: `X0 : 0x…    X1 : 0x…`, one pair per line.
#[derive(Debug, Clone, Copy)]
pub struct RegisterDump<'a> {
    regs: &'a RegisterFile,
}

impl<'a> RegisterDump<'a> {
    /// Wraps a register file for display.
    pub const fn new(regs: &'a RegisterFile) -> Self {
        Self { regs }
    }
}

impl fmt::Display for RegisterDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.regs.snapshot();
        for i in (0..REG_COUNT).step_by(2) {
            writeln!(
                f,
                "{:<3}: {:#018x}    {:<3}: {:#018x}",
                register_name(i),
                values[i],
                register_name(i + 1),
                values[i + 1]
            )?;
        }
        Ok(())
    }
}

/// Address-ordered memory listing: `0x<address>: 0x<value>`.
#[derive(Debug, Clone, Copy)]
pub struct MemoryDump<'a> {
    memory: &'a DataMemory,
    filter: &'a DumpConfig,
}

impl<'a> MemoryDump<'a> {
    /// Wraps a memory for display using the given filters.
    pub const fn new(memory: &'a DataMemory, filter: &'a DumpConfig) -> Self {
        Self { memory, filter }
    }

    /// Returns the entries that pass the filters, in address order.
    pub fn entries(&self) -> Vec<(i64, i64)> {
        self.memory
            .snapshot()
            .into_iter()
            .filter(|&(addr, value)| {
                (!self.filter.nonzero_only || value != 0)
                    && (!self.filter.aligned_only || addr % WORD_BYTES == 0)
            })
            .collect()
    }
}

impl fmt::Display for MemoryDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries();
        if entries.is_empty() {
            return writeln!(f, "(empty)");
        }
        for (addr, value) in entries {
            writeln!(f, "{addr:#018x}: {value:#018x}")?;
        }
        Ok(())
    }
}
