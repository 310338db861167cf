//! Arithmetic reporting the processor's carry (unsigned) or overflow (signed) flag.

macro_rules! impl_overflowing {
    ($trait_name:ident, $method:ident, $($T:ty),*) => {
        $(
            impl $trait_name for $T {
                #[inline]
                fn $method(self, rhs: Self) -> (Self, bool) {
                    <$T>::$method(self, rhs)
                }
            }
        )*
    };
}

/// Addition returning the wrapped sum and the overflow flag.
pub trait OverflowingAdd: Sized + Copy {
    /// Calculates `self + rhs`.
    ///
    /// Returns a tuple of the addition along with a boolean indicating
    /// whether an arithmetic overflow would occur. On overflow, the wrapped value is returned.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
}

impl_overflowing!(OverflowingAdd, overflowing_add, u8, u16, u32, u64, i8, i16, i32, i64);

/// Subtraction returning the wrapped difference and the overflow flag.
pub trait OverflowingSub: Sized + Copy {
    /// Calculates `self - rhs`.
    ///
    /// Returns a tuple of the subtraction along with a boolean indicating
    /// whether an arithmetic overflow would occur. On overflow, the wrapped value is returned.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
}

impl_overflowing!(OverflowingSub, overflowing_sub, u8, u16, u32, u64, i8, i16, i32, i64);

/// Multiplication returning the wrapped product and the overflow flag.
pub trait OverflowingMul: Sized + Copy {
    /// Calculates `self * rhs`.
    ///
    /// Returns a tuple of the multiplication along with a boolean indicating
    /// whether an arithmetic overflow would occur. On overflow, the wrapped value is returned.
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);
}

impl_overflowing!(OverflowingMul, overflowing_mul, u8, u16, u32, u64, i8, i16, i32, i64);
