//! Common utilities and types used throughout the machine core.
//!
//! This module provides fundamental building blocks shared by every component. It includes:
//! 1. **Constants:** Register aliases, word width, and instruction size.
//! 2. **Error Handling:** The single machine error type and its result alias.
//! 3. **Sign Extension:** Widening of N-bit immediate fields to the machine word.

/// Machine-wide constants.
pub mod constants;

/// Error types raised by the core.
pub mod error;

/// Sign extension of narrow two's-complement fields.
pub mod sext;

pub use constants::{REG_COUNT, REG_SP, REG_ZERO, WORD_BYTES};
pub use error::{RegisterAccess, SimError, SimResult};
pub use sext::{SignExtend, extend};
