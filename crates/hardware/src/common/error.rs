//! Machine Error definitions.
//!
//! This module defines the single error type raised by every component of the core. It provides:
//! 1. **Taxonomy:** One variant per failure kind (register, memory, bit width, division, PC).
//! 2. **Context:** Each variant carries the offending value that triggered it.
//! 3. **Wrapping:** `SimulationFailure` attaches program counter and cycle context to a
//!    lower-level failure when it is surfaced by the machine.

use std::fmt;

/// The register operation that was attempted when an index was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterAccess {
    /// A register read.
    Read,
    /// A register write.
    Write,
}

impl fmt::Display for RegisterAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Errors raised by the register file, data memory, ALU, sign extender and machine.
///
/// Every failure is fatal to the operation that raised it: no partial state change is
/// applied, and nothing is retried. The caller decides whether to abort, skip or halt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// Register index outside `0..=31`.
    #[error("invalid register index {index} on {access}")]
    InvalidRegisterIndex {
        /// The rejected index.
        index: i32,
        /// The attempted operation.
        access: RegisterAccess,
    },

    /// Memory access with a negative address.
    #[error("negative memory address {address}")]
    NegativeAddress {
        /// The rejected address.
        address: i64,
    },

    /// Sign extension requested from a width the input type cannot hold.
    #[error("invalid bit width {width} (expected 1..={max})")]
    InvalidBitWidth {
        /// The requested source width.
        width: u32,
        /// The native width of the input type.
        max: u32,
    },

    /// `SDIV`/`UDIV` with a zero divisor.
    #[error("division by zero ({dividend} / {divisor})")]
    DivisionByZero {
        /// The first operand.
        dividend: i64,
        /// The second operand (always zero).
        divisor: i64,
    },

    /// Branch target that is negative or not instruction-aligned.
    #[error("invalid program counter {address:#x}")]
    InvalidProgramCounter {
        /// The rejected target address.
        address: i64,
    },

    /// A lower-level failure surfaced with the execution context active when it occurred.
    #[error("simulation failure at pc {pc:#018x}, cycle {cycle}: {source}")]
    SimulationFailure {
        /// Program counter of the failing instruction.
        pc: u64,
        /// Cycle number of the failing instruction.
        cycle: u64,
        /// The underlying failure.
        #[source]
        source: Box<SimError>,
    },
}

impl SimError {
    /// Attaches program counter and cycle context to this error.
    ///
    /// An error that already carries context is returned unchanged, so the context
    /// recorded is always the one closest to the point of failure.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter active at the time of failure.
    /// * `cycle` - Cycle number active at the time of failure.
    #[must_use]
    pub fn with_context(self, pc: u64, cycle: u64) -> Self {
        match self {
            Self::SimulationFailure { .. } => self,
            other => Self::SimulationFailure {
                pc,
                cycle,
                source: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, skipping any `SimulationFailure` wrappers.
    pub fn root(&self) -> &Self {
        match self {
            Self::SimulationFailure { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result alias used by every fallible operation in the core.
pub type SimResult<T> = Result<T, SimError>;
