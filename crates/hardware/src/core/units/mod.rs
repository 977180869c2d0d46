//! Execution units and functional components.
//!
//! This module contains the processor's execution units. The core carries a
//! single one: the integer ALU with NZCV flag generation.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
