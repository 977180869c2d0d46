//! ALU arithmetic operations.
//!
//! Implements addition and subtraction with full NZCV flag derivation, and the
//! multiply/divide family (`MUL`, `SMULH`, `UMULH`, `SDIV`, `UDIV`).
//!
//! Carry follows the ARMv8 convention: for `SUB` it is the carry out of
//! `a + !b + 1`, i.e. set when no unsigned borrow occurs.

use super::{AluOp, AluOutcome};
use crate::common::error::{SimError, SimResult};

/// Number of bits in a machine word (used for high-multiply shift).
const XLEN_BITS: u32 = 64;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The outcome with flags, or `DivisionByZero` for `SDIV`/`UDIV` with `b == 0`.
/// Non-arithmetic opcodes produce an all-clear zero outcome.
pub fn execute(op: AluOp, a: i64, b: i64) -> SimResult<AluOutcome> {
    let outcome = match op {
        AluOp::Add => {
            let (result, overflow) = a.overflowing_add(b);
            let (_, carry) = (a as u64).overflowing_add(b as u64);
            AluOutcome::with_flags(result, carry, overflow)
        }
        AluOp::Sub => {
            let (result, overflow) = a.overflowing_sub(b);
            let carry = (a as u64) >= (b as u64);
            AluOutcome::with_flags(result, carry, overflow)
        }
        AluOp::Mul => AluOutcome::from_result(a.wrapping_mul(b)),
        AluOp::Smulh => {
            AluOutcome::from_result(((a as i128 * b as i128) >> XLEN_BITS) as i64)
        }
        AluOp::Umulh => {
            // Zero-extend through u64 so negative operands are treated as large unsigned values.
            let wide = (a as u64 as u128) * (b as u64 as u128);
            AluOutcome::from_result((wide >> XLEN_BITS) as u64 as i64)
        }
        AluOp::Sdiv => {
            if b == 0 {
                return Err(SimError::DivisionByZero {
                    dividend: a,
                    divisor: b,
                });
            }
            // i64::MIN / -1 wraps to i64::MIN, as the hardware does.
            AluOutcome::from_result(a.wrapping_div(b))
        }
        AluOp::Udiv => {
            if b == 0 {
                return Err(SimError::DivisionByZero {
                    dividend: a,
                    divisor: b,
                });
            }
            AluOutcome::from_result(((a as u64) / (b as u64)) as i64)
        }
        _ => AluOutcome::default(),
    };
    Ok(outcome)
}
