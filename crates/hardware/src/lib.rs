//! LEGv8 machine-state core.
//!
//! This crate implements the execution-time state and arithmetic substrate of a
//! 64-bit LEGv8 (ARMv8 subset) machine:
//! 1. **Core:** The 32-entry register file with hardwired `XZR`, NZCV flags, and the ALU.
//! 2. **Memory:** Sparse, lazily zero, byte-addressed data memory.
//! 3. **Common:** Sign extension, machine constants, and the error taxonomy.
//! 4. **Simulation:** A machine wrapper that attaches pc/cycle context to failures,
//!    configuration, statistics, and diagnostic dumps.
//!
//! Instruction decoding, program loading and user interfaces live outside this crate;
//! they drive the types defined here.

/// Common types and constants (errors, sign extension, register aliases).
pub mod common;
/// Machine configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (register file, condition flags, ALU).
pub mod core;
/// Machine wrapper and diagnostic dumps.
pub mod sim;
/// Data memory.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Error type returned by every fallible operation.
pub use crate::common::{SimError, SimResult};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Top-level machine; construct with `Machine::new`.
pub use crate::sim::Machine;
