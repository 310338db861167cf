//! By-value wrapping arithmetic, used to compute naked results.

macro_rules! impl_wrapping {
    ($trait_name:ident, $method:ident, $($T:ty),*) => {
        $(
            impl $trait_name for $T {
                #[inline]
                fn $method(self, v: Self) -> Self {
                    <$T>::$method(self, v)
                }
            }
        )*
    };
}

/// Performs addition that wraps around on overflow.
pub trait WrappingAdd: Sized + Copy {
    /// Wrapping (modular) addition. Computes `self + v`, wrapping around at the boundary of
    /// the type.
    fn wrapping_add(self, v: Self) -> Self;
}

impl_wrapping!(WrappingAdd, wrapping_add, u8, u16, u32, u64, i8, i16, i32, i64);

/// Performs subtraction that wraps around on overflow.
pub trait WrappingSub: Sized + Copy {
    /// Wrapping (modular) subtraction. Computes `self - v`, wrapping around at the boundary
    /// of the type.
    fn wrapping_sub(self, v: Self) -> Self;
}

impl_wrapping!(WrappingSub, wrapping_sub, u8, u16, u32, u64, i8, i16, i32, i64);

/// Performs multiplication that wraps around on overflow.
pub trait WrappingMul: Sized + Copy {
    /// Wrapping (modular) multiplication. Computes `self * v`, wrapping around at the boundary
    /// of the type.
    fn wrapping_mul(self, v: Self) -> Self;
}

impl_wrapping!(WrappingMul, wrapping_mul, u8, u16, u32, u64, i8, i16, i32, i64);

/// Performs division that wraps around on overflow.
pub trait WrappingDiv: Sized + Copy {
    /// Wrapping division. Computes `self / v`; `MIN / -1` wraps to `MIN` for signed types.
    ///
    /// # Panics
    ///
    /// Panics if `v` is zero.
    fn wrapping_div(self, v: Self) -> Self;
}

impl_wrapping!(WrappingDiv, wrapping_div, u8, u16, u32, u64, i8, i16, i32, i64);

/// Performs a negation that does not panic.
pub trait WrappingNeg: Sized + Copy {
    /// Wrapping (modular) negation. Computes `-self`,
    /// wrapping around at the boundary of the type.
    ///
    /// For an unsigned type holding the image of a negative value `x`,
    /// this recovers `|x|`.
    ///
    /// ```ignore
    /// assert_eq!((-100i8).wrapping_neg(), 100);
    /// assert_eq!((-128i8).wrapping_neg(), -128); // wrapped!
    /// assert_eq!(156u8.wrapping_neg(), 100);
    /// ```
    fn wrapping_neg(self) -> Self;
}

macro_rules! impl_wrapping_neg {
    ($($T:ty),*) => {
        $(
            impl WrappingNeg for $T {
                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$T>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_wrapping_neg!(u8, u16, u32, u64, i8, i16, i32, i64);
