//! LEGv8 architectural state.
//!
//! This module contains the architecturally visible processor state:
//! 1. **GPRs:** The 32-entry general-purpose register file with `XZR`.
//! 2. **Flags:** The NZCV condition flags and condition-code evaluation.

/// NZCV condition flags and condition codes.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::{Condition, ConditionFlags};
pub use gpr::RegisterFile;
