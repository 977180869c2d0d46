//! Machine memory system.
//!
//! This module organizes the storage that sits outside the processor core.
//! The machine has a single flat data memory.

/// Sparse data memory.
pub mod memory;

pub use memory::DataMemory;
