//! ALU operation tags.

use std::fmt;

/// Operations understood by the ALU.
///
/// The set is closed. A control unit maps each decoded opcode to exactly one tag;
/// opcodes it cannot map are sent as [`AluOp::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Addition (`ADD`, `ADDI`, `ADDS`, address generation).
    Add,
    /// Subtraction (`SUB`, `SUBI`, `SUBS`, `CMP`).
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise inclusive OR.
    Orr,
    /// Bitwise exclusive OR.
    Eor,
    /// Logical shift left.
    Lsl,
    /// Logical shift right.
    Lsr,
    /// Arithmetic shift right.
    Asr,
    /// Passes operand B through (`MOV`, `MOVZ`).
    Mov,
    /// Passes operand A through (e.g. `CBZ` testing a register).
    PassA,
    /// Signed multiply, low 64 bits of the product.
    Mul,
    /// Signed multiply, high 64 bits of the 128-bit product.
    Smulh,
    /// Unsigned multiply, high 64 bits of the 128-bit product.
    Umulh,
    /// Signed divide.
    Sdiv,
    /// Unsigned divide.
    Udiv,
    /// No operation this cycle; result 0, flags clear.
    Idle,
    /// The decoder could not map an opcode. Behaves as `Idle` but flags a decode defect.
    Unknown,
}

impl AluOp {
    /// Returns true for operations whose carry/overflow flags carry meaning.
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns true if this tag marks a latent decode defect in the caller.
    ///
    /// The ALU never raises this as an error; the control unit decides whether to escalate.
    pub const fn signals_decode_defect(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Upper-case mnemonic for traces and dumps.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Orr => "ORR",
            Self::Eor => "EOR",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Asr => "ASR",
            Self::Mov => "MOV",
            Self::PassA => "PASS_A",
            Self::Mul => "MUL",
            Self::Smulh => "SMULH",
            Self::Umulh => "UMULH",
            Self::Sdiv => "SDIV",
            Self::Udiv => "UDIV",
            Self::Idle => "IDLE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
