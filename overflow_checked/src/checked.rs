use core::fmt;

use crate::error::{OverflowError, Result};
use crate::integer::{IntKind, Integer};
use crate::policy::{global, Policy};
use crate::validate::{self, RawValue};

/// A fixed-width integer whose arithmetic detects overflow.
///
/// Values are immutable; every operation produces a new `Checked` of the
/// common type of its operands (see [`Promote`](crate::Promote)).
///
/// ```
/// use overflow_checked::Checked;
///
/// let a = Checked::<i8>::new(100).unwrap();
/// let b = Checked::<i16>::new(100).unwrap();
/// let c: Checked<i16> = (a + b).unwrap();
/// assert_eq!(c.get(), 200);
///
/// assert!(Checked::<u8>::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Checked<T: Integer>(T);

impl<T: Integer> Checked<T> {
    /// The smallest value of `T`.
    pub const MIN: Self = Self(T::MIN);
    /// The largest value of `T`.
    pub const MAX: Self = Self(T::MAX);
    /// Zero.
    pub const ZERO: Self = Self(T::ZERO);

    /// Constructs from `raw` under the process-wide policy.
    pub fn new<R: RawValue>(raw: R) -> Result<Self> {
        Self::new_with(raw, &global::snapshot())
    }

    /// Constructs from `raw` under `policy`.
    ///
    /// Fails with [`InitializationOutOfRange`](crate::OverflowError::InitializationOutOfRange)
    /// when `raw` is not exactly representable in `T`. If the policy skips the
    /// initialization check or disables checking for `T`, the value is
    /// truncated instead.
    pub fn new_with<R: RawValue>(raw: R, policy: &Policy) -> Result<Self> {
        if policy.validates::<T>() {
            validate::validate(raw).map(Self)
        } else {
            Ok(Self(validate::truncate(raw)))
        }
    }

    /// Wraps a value proven to be exact.
    #[inline(always)]
    pub(crate) const fn from_verified(value: T) -> Self {
        Self(value)
    }

    /// The underlying value.
    #[inline(always)]
    pub fn get(self) -> T {
        self.0
    }

    /// Descriptor of the underlying type.
    #[inline]
    pub fn kind(self) -> IntKind {
        T::KIND
    }
}

impl<T: Integer> From<T> for Checked<T> {
    /// Every `T` is representable in `T`.
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Integer> fmt::Display for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! impl_readback {
    ($($T:ty),*) => {
        $(
            impl From<Checked<$T>> for $T {
                #[inline]
                fn from(value: Checked<$T>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_readback!(i8, i16, i32, i64, u8, u16, u32, u64);

// Same-type conversions are covered by `From<T>`.
macro_rules! impl_try_from {
    ($($T:ty => $($R:ty),*;)*) => {
        $(
            $(
                impl TryFrom<$R> for Checked<$T> {
                    type Error = OverflowError;

                    /// Validates `raw` under the process-wide policy.
                    #[inline]
                    fn try_from(raw: $R) -> Result<Self> {
                        Self::new(raw)
                    }
                }
            )*
        )*
    };
}

impl_try_from! {
    i8 => i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    i16 => i8, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    i32 => i8, i16, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    i64 => i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize;
    u8 => i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize;
    u16 => i8, i16, i32, i64, i128, isize, u8, u32, u64, u128, usize;
    u32 => i8, i16, i32, i64, i128, isize, u8, u16, u64, u128, usize;
    u64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u128, usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readback() {
        let policy = Policy::new();
        let v = Checked::<i32>::new_with(-7i64, &policy).unwrap();
        assert_eq!(v.get(), -7);
        assert_eq!(i32::from(v), -7);
        assert_eq!(v.kind(), IntKind::I32);
        assert_eq!(v.to_string(), "-7");
        assert_eq!(Checked::<u16>::default().get(), 0);
        assert_eq!(Checked::from(5u8).get(), 5);
    }

    #[test]
    fn test_new_with_rejects_out_of_range() {
        let policy = Policy::new();
        let err = Checked::<u8>::new_with(256, &policy).unwrap_err();
        assert!(matches!(
            err,
            OverflowError::InitializationOutOfRange {
                target: IntKind::U8,
                ..
            }
        ));
    }

    #[test]
    fn test_new_with_skip_truncates() {
        let mut policy = Policy::new();
        policy.skip_initialization_check(true);
        assert_eq!(Checked::<u8>::new_with(256, &policy).unwrap().get(), 0);
        assert_eq!(Checked::<i8>::new_with(-129, &policy).unwrap().get(), 127);
    }

    #[test]
    fn test_new_with_disabled_type_truncates() {
        let mut policy = Policy::new();
        policy.disable::<i8>();
        assert_eq!(Checked::<i8>::new_with(200, &policy).unwrap().get(), -56);
        assert!(Checked::<u8>::new_with(300, &policy).is_err());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Checked::<u8>::try_from(255i64).unwrap().get(), 255);
        assert_eq!(Checked::<i64>::try_from(i64::MAX as u64).unwrap().get(), i64::MAX);
        assert!(Checked::<u16>::try_from(-1i32).is_err());
        assert!(matches!(
            Checked::<i8>::try_from(128u128),
            Err(OverflowError::InitializationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Checked::<i16>::MIN.get(), i16::MIN);
        assert_eq!(Checked::<u64>::MAX.get(), u64::MAX);
        assert_eq!(Checked::<i64>::ZERO.get(), 0);
    }
}
