//! NZCV Condition Flags.
//!
//! This module holds the processor condition flags and the ARMv8 condition codes
//! evaluated against them. It provides:
//! 1. **Latching:** Flags captured from a flag-setting ALU outcome.
//! 2. **Conditions:** The sixteen 4-bit condition encodings used by `B.cond`.
//! 3. **Evaluation:** Standard ARMv8 condition semantics over N, Z, C and V.

use std::fmt;

use crate::core::units::alu::AluOutcome;

/// The four processor condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConditionFlags {
    /// Negative: sign bit of the last flag-setting result.
    pub n: bool,
    /// Zero: the last flag-setting result was zero.
    pub z: bool,
    /// Carry: unsigned overflow (ADD) or no borrow (SUB).
    pub c: bool,
    /// Overflow: signed overflow.
    pub v: bool,
}

impl From<&AluOutcome> for ConditionFlags {
    fn from(outcome: &AluOutcome) -> Self {
        Self {
            n: outcome.negative,
            z: outcome.zero,
            c: outcome.carry,
            v: outcome.overflow,
        }
    }
}

impl ConditionFlags {
    /// Returns true if `cond` holds under these flags.
    pub const fn holds(self, cond: Condition) -> bool {
        match cond {
            Condition::Eq => self.z,
            Condition::Ne => !self.z,
            Condition::Hs => self.c,
            Condition::Lo => !self.c,
            Condition::Mi => self.n,
            Condition::Pl => !self.n,
            Condition::Vs => self.v,
            Condition::Vc => !self.v,
            Condition::Hi => self.c && !self.z,
            Condition::Ls => !(self.c && !self.z),
            Condition::Ge => self.n == self.v,
            Condition::Lt => self.n != self.v,
            Condition::Gt => !self.z && self.n == self.v,
            Condition::Le => !(!self.z && self.n == self.v),
            Condition::Al => true,
        }
    }
}

impl fmt::Display for ConditionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            bit(self.n, 'N'),
            bit(self.z, 'Z'),
            bit(self.c, 'C'),
            bit(self.v, 'V')
        )
    }
}

/// ARMv8 condition codes, in encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Equal (`Z`).
    Eq,
    /// Not equal (`!Z`).
    Ne,
    /// Unsigned higher or same (`C`).
    Hs,
    /// Unsigned lower (`!C`).
    Lo,
    /// Negative (`N`).
    Mi,
    /// Positive or zero (`!N`).
    Pl,
    /// Signed overflow (`V`).
    Vs,
    /// No signed overflow (`!V`).
    Vc,
    /// Unsigned higher (`C && !Z`).
    Hi,
    /// Unsigned lower or same.
    Ls,
    /// Signed greater or equal (`N == V`).
    Ge,
    /// Signed less than (`N != V`).
    Lt,
    /// Signed greater than.
    Gt,
    /// Signed less or equal.
    Le,
    /// Always.
    Al,
}

impl Condition {
    /// Maps a 4-bit condition field to its condition. `0b1111` also means "always".
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            0x0 => Self::Eq,
            0x1 => Self::Ne,
            0x2 => Self::Hs,
            0x3 => Self::Lo,
            0x4 => Self::Mi,
            0x5 => Self::Pl,
            0x6 => Self::Vs,
            0x7 => Self::Vc,
            0x8 => Self::Hi,
            0x9 => Self::Ls,
            0xA => Self::Ge,
            0xB => Self::Lt,
            0xC => Self::Gt,
            0xD => Self::Le,
            _ => Self::Al,
        }
    }

    /// Assembly mnemonic suffix (e.g. `"EQ"` for `B.EQ`).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Hs => "HS",
            Self::Lo => "LO",
            Self::Mi => "MI",
            Self::Pl => "PL",
            Self::Vs => "VS",
            Self::Vc => "VC",
            Self::Hi => "HI",
            Self::Ls => "LS",
            Self::Ge => "GE",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Le => "LE",
            Self::Al => "AL",
        }
    }
}
