//! # Core Components
//!
//! Tests for the processor core: architectural state and execution units.
