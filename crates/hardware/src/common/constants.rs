//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the core. It includes:
//! 1. **Register Constants:** Register count and the architectural aliases (SP, FP, LR, XZR).
//! 2. **Word Constants:** Native data width in bits and bytes.
//! 3. **Instruction Constants:** Instruction size used for program counter alignment.

/// Number of general-purpose registers (`X0`-`X31`).
pub const REG_COUNT: usize = 32;

/// Register `X28`, the stack pointer (SP) by convention.
pub const REG_SP: usize = 28;

/// Register `X29`, the frame pointer (FP).
pub const REG_FP: usize = 29;

/// Register `X30`, the link register (LR).
pub const REG_LR: usize = 30;

/// Register `X31`, the hardwired zero register (XZR).
pub const REG_ZERO: usize = 31;

/// Width of a machine word in bits.
pub const WORD_BITS: u32 = 64;

/// Size of a machine word in bytes.
pub const WORD_BYTES: i64 = 8;

/// Size of an encoded instruction in bytes; the program counter must be a multiple of this.
pub const INSTRUCTION_BYTES: i64 = 4;

/// Bit mask for extracting a shift amount from the second ALU operand (6 bits: 0-63).
pub const SHAMT_MASK: i64 = 0x3f;
