//! Defines the fixed-width integer capability shared by every checked operation.

mod kind;
mod minus_one;
mod overflowing;
mod wrapping;

use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{ConstOne, ConstZero, FromPrimitive, ToPrimitive};

pub use kind::IntKind;
pub use minus_one::MinusOne;
pub use overflowing::*;
pub use wrapping::*;

/// An abstract over the fixed-width integer types a [`Checked`](crate::Checked) may wrap.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32` and `u64`.
pub trait Integer:
    'static
    + Sized
    + Send
    + Sync
    + Clone
    + Copy
    + Default
    + PartialOrd
    + Ord
    + PartialEq
    + Eq
    + Hash
    + Debug
    + Display
    + ConstZero
    + ConstOne
    + MinusOne
    + ToPrimitive
    + FromPrimitive
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingDiv
    + WrappingNeg
    + OverflowingAdd
    + OverflowingSub
    + OverflowingMul
{
    /// Run-time descriptor of `Self`.
    const KIND: IntKind;

    /// Whether `Self` is signed.
    const SIGNED: bool;

    /// The smallest value of `Self`.
    const MIN: Self;

    /// The largest value of `Self`.
    const MAX: Self;

    /// Widens `self` into `i128`, which encloses every implementing type.
    fn widen(self) -> i128;

    /// Keeps the low bits of `wide`, i.e. reduces it modulo `2^BITS`.
    fn truncate(wide: i128) -> Self;

    /// Returns `true` if `self` is strictly below zero.
    #[inline(always)]
    fn is_negative(self) -> bool {
        Self::SIGNED && self < Self::ZERO
    }
}

macro_rules! impl_integer {
    ($($T:ty => $kind:ident, $signed:literal);* $(;)?) => {
        $(
            // The detectors rely on modulo wrap-around.
            const _: () = assert!(<$T>::MAX.wrapping_add(1) == <$T>::MIN);

            impl Integer for $T {
                const KIND: IntKind = IntKind::$kind;
                const SIGNED: bool = $signed;
                const MIN: Self = <$T>::MIN;
                const MAX: Self = <$T>::MAX;

                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn truncate(wide: i128) -> Self {
                    wide as $T
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8, true;
    i16 => I16, true;
    i32 => I32, true;
    i64 => I64, true;
    u8 => U8, false;
    u16 => U16, false;
    u32 => U32, false;
    u64 => U64, false;
}
