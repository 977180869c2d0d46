//! ALU shift operations.
//!
//! Implements logical shift left (LSL), logical shift right (LSR), and
//! arithmetic shift right (ASR).
//!
//! Shift amounts come from the low 6 bits of operand B (0-63), matching
//! 64-bit shifter hardware; larger amounts wrap rather than saturate.

use super::AluOp;
use crate::common::constants::SHAMT_MASK;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 6 bits used, upper bits ignored).
///
/// # Returns
///
/// The 64-bit result. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    let sh6 = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Lsl => ((a as u64) << sh6) as i64,
        AluOp::Lsr => ((a as u64) >> sh6) as i64,
        AluOp::Asr => a >> sh6,
        _ => 0,
    }
}
