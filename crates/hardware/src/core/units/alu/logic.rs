//! ALU logical and data-movement operations.
//!
//! Implements bitwise AND, ORR and EOR, and the two pass-through operations
//! (`MOV` forwards operand B, `PASS_A` forwards operand A). None of these
//! produce carry or overflow.

use super::AluOp;

/// Executes a logical or pass-through operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic or move variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 64-bit result. Returns `0` for other opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::And => a & b,
        AluOp::Orr => a | b,
        AluOp::Eor => a ^ b,
        AluOp::Mov => b,
        AluOp::PassA => a,
        _ => 0,
    }
}
