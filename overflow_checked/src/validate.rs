//! Construction-time range validation.
//!
//! A raw value is widened into the enclosing type of the target (`i128` for
//! signed targets, `u128` for unsigned ones), compared against the widened
//! bounds, then narrowed and widened back; the round trip must reproduce the
//! input.

use core::fmt::Display;

use log::debug;
use num_traits::ToPrimitive;

use crate::error::{OverflowError, Result};
use crate::integer::Integer;
use crate::LOG_TARGET;

/// Primitive numeric values a [`Checked`](crate::Checked) can be constructed from.
pub trait RawValue: Copy + Display + ToPrimitive {
    /// Whether the value is a finite whole number.
    #[inline(always)]
    fn is_integral(self) -> bool {
        true
    }

    /// Converts with `as` into `i128`: modulo `2^128` for integers,
    /// saturating for floating-point values.
    fn as_i128(self) -> i128;
}

macro_rules! impl_raw_int {
    ($($T:ty),*) => {
        $(
            impl RawValue for $T {
                #[inline(always)]
                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_raw_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_raw_float {
    ($($T:ty),*) => {
        $(
            impl RawValue for $T {
                #[inline]
                fn is_integral(self) -> bool {
                    self.is_finite() && self.fract() == 0.0
                }

                #[inline(always)]
                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_raw_float!(f32, f64);

/// Converts `raw` into `T`, failing with
/// [`OverflowError::InitializationOutOfRange`] unless `T` represents it exactly.
///
/// ```
/// use overflow_checked::validate::validate;
///
/// assert_eq!(validate::<i8, _>(-128i64).unwrap(), -128);
/// assert!(validate::<u8, _>(256u16).is_err());
/// assert!(validate::<u8, _>(-1i8).is_err());
/// assert!(validate::<i32, _>(2.5f64).is_err());
/// ```
pub fn validate<T: Integer, R: RawValue>(raw: R) -> Result<T> {
    let narrowed = if !raw.is_integral() {
        None
    } else if T::SIGNED {
        raw.to_i128().and_then(|wide| {
            if wide < T::MIN.widen() || wide > T::MAX.widen() {
                return None;
            }
            T::from_i128(wide).filter(|v| v.widen() == wide)
        })
    } else {
        raw.to_u128().and_then(|wide| {
            // Unsigned bounds are non-negative, so the casts are exact.
            if wide < T::MIN.widen() as u128 || wide > T::MAX.widen() as u128 {
                return None;
            }
            T::from_u128(wide).filter(|v| v.widen() as u128 == wide)
        })
    };

    narrowed.ok_or_else(|| {
        let err = OverflowError::InitializationOutOfRange {
            target: T::KIND,
            value: raw.to_string(),
            min: T::MIN.widen(),
            max: T::MAX.widen(),
        };
        debug!(target: LOG_TARGET, "{err}");
        err
    })
}

/// Converts `raw` into `T` without validation, keeping the low bits.
#[inline]
pub fn truncate<T: Integer, R: RawValue>(raw: R) -> T {
    T::truncate(raw.as_i128())
}
