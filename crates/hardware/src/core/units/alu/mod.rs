//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute step. It computes
//! a 64-bit result together with the four condition flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (with carry/overflow), Mul, Smulh, Umulh, Sdiv, Udiv
//! - [`logic`]:      And, Orr, Eor, Mov, `PassA`
//! - [`shifts`]:     Lsl, Lsr, Asr

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and pass-through operations.
pub mod logic;

/// Operation tags.
pub mod op;

/// Shift operations (lsl, lsr, asr).
pub mod shifts;

pub use op::AluOp;

use crate::common::error::SimResult;

/// Result of one ALU evaluation.
///
/// `negative` and `zero` are always derived from `result`. `carry` and `overflow`
/// are only ever set by `ADD`/`SUB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutcome {
    /// The 64-bit result.
    pub result: i64,
    /// Sign bit of the result.
    pub negative: bool,
    /// Result is zero.
    pub zero: bool,
    /// Unsigned carry out (ADD) or no-borrow (SUB).
    pub carry: bool,
    /// Signed overflow.
    pub overflow: bool,
}

impl AluOutcome {
    /// Builds an outcome with N/Z derived from `result` and C/V clear.
    pub const fn from_result(result: i64) -> Self {
        Self::with_flags(result, false, false)
    }

    /// Builds an outcome with N/Z derived from `result` and explicit C/V.
    pub const fn with_flags(result: i64, carry: bool, overflow: bool) -> Self {
        Self {
            result,
            negative: result < 0,
            zero: result == 0,
            carry,
            overflow,
        }
    }
}

/// Arithmetic Logic Unit for 64-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Pure and deterministic: dispatches to the appropriate submodule by operation
    /// category. `Idle` and `Unknown` produce a zero result with every flag clear;
    /// callers check [`AluOp::signals_decode_defect`] to detect the latter.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (also the shift amount for shifts).
    ///
    /// # Returns
    ///
    /// The outcome, or `DivisionByZero` for `SDIV`/`UDIV` with a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use legv8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let out = Alu::compute(AluOp::Add, 1, -1).unwrap();
    /// assert_eq!(out.result, 0);
    /// assert!(out.zero && out.carry && !out.overflow);
    ///
    /// let out = Alu::compute(AluOp::Lsl, 1, 68).unwrap(); // amount masked to 4
    /// assert_eq!(out.result, 0x10);
    ///
    /// assert!(Alu::compute(AluOp::Udiv, 7, 0).is_err());
    /// ```
    pub fn compute(op: AluOp, a: i64, b: i64) -> SimResult<AluOutcome> {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Smulh
            | AluOp::Umulh
            | AluOp::Sdiv
            | AluOp::Udiv => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Orr | AluOp::Eor | AluOp::Mov | AluOp::PassA => {
                Ok(AluOutcome::from_result(logic::execute(op, a, b)))
            }

            AluOp::Lsl | AluOp::Lsr | AluOp::Asr => {
                Ok(AluOutcome::from_result(shifts::execute(op, a, b)))
            }

            AluOp::Idle | AluOp::Unknown => Ok(AluOutcome::default()),
        }
    }
}
