//! # Memory System Tests
//!
//! This module organizes tests for the data memory.
