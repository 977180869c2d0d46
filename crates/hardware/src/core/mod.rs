//! Core processor state and execution units.
//!
//! This module contains the architectural register state and the functional
//! units that a control unit drives while executing instructions.

/// Architectural state (register file, condition flags).
pub mod arch;

/// Execution units (ALU).
pub mod units;

pub use self::arch::{ConditionFlags, RegisterFile};
pub use self::units::alu::{Alu, AluOp, AluOutcome};
