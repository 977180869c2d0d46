//! Simulation-level machine wrapper and diagnostics.
//!
//! Provides the [`Machine`] that a control unit drives one step at a time, and
//! the text renderers used to inspect its registers and memory.

/// Register and memory dump renderers.
pub mod dump;

/// Machine state owner and step wrapper.
pub mod machine;

pub use dump::{MemoryDump, RegisterDump, register_name};
pub use machine::Machine;
