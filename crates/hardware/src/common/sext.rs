//! Sign Extension.
//!
//! Widens an N-bit two's-complement field to the 64-bit machine word. Decoders use
//! this for every immediate and offset field. Two input widths are supported:
//! 1. **Narrow:** `i32`/`u32` inputs, source widths `1..=32`.
//! 2. **Wide:** `i64`/`u64` inputs, source widths `1..=64`.

use super::error::{SimError, SimResult};

/// Values that can be sign-extended from a sub-field of their own width.
pub trait SignExtend: Copy {
    /// Native width of the input type in bits; the largest accepted source width.
    const NATIVE_BITS: u32;

    /// Returns the raw bits zero-extended to 64 bits.
    fn raw_bits(self) -> u64;

    /// Reinterprets the value at full machine width, sign-extending from the native width.
    fn to_word(self) -> i64;

    /// Sign-extends the low `bits` bits of `self` to a 64-bit signed value.
    ///
    /// # Arguments
    ///
    /// * `bits` - Width of the two's-complement field, including its sign bit.
    ///
    /// # Returns
    ///
    /// The extended value, or `InvalidBitWidth` if `bits` is outside `1..=NATIVE_BITS`.
    fn sign_extend(self, bits: u32) -> SimResult<i64> {
        if bits == 0 || bits > Self::NATIVE_BITS {
            return Err(SimError::InvalidBitWidth {
                width: bits,
                max: Self::NATIVE_BITS,
            });
        }
        if bits == Self::NATIVE_BITS {
            return Ok(self.to_word());
        }

        let raw = self.raw_bits();
        let mask = (1u64 << bits) - 1;
        if (raw >> (bits - 1)) & 1 == 1 {
            Ok((raw | !mask) as i64)
        } else {
            Ok((raw & mask) as i64)
        }
    }
}

macro_rules! impl_sign_extend {
    ($ty:ty, $unsigned:ty, $signed:ty, $bits:expr) => {
        impl SignExtend for $ty {
            const NATIVE_BITS: u32 = $bits;

            #[inline]
            fn raw_bits(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline]
            fn to_word(self) -> i64 {
                self as $signed as i64
            }
        }
    };
}

impl_sign_extend!(i32, u32, i32, 32);
impl_sign_extend!(u32, u32, i32, 32);
impl_sign_extend!(i64, u64, i64, 64);
impl_sign_extend!(u64, u64, i64, 64);

/// Sign-extends the low `bits` bits of `value` to a 64-bit signed value.
///
/// # Examples
///
/// ```
/// use legv8_core::common::sext::extend;
///
/// assert_eq!(extend(0b1010_i32, 4), Ok(-6));
/// assert_eq!(extend(0b0101_i32, 4), Ok(5));
/// assert_eq!(extend(1_u64, 1), Ok(-1));
/// assert!(extend(0_i64, 65).is_err());
/// ```
#[inline]
pub fn extend<T: SignExtend>(value: T, bits: u32) -> SimResult<i64> {
    value.sign_extend(bits)
}
