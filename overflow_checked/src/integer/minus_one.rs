/// Recognises `-1`, the only divisor and multiplier able to overflow a
/// two's complement type on its own.
pub trait MinusOne: Sized + Copy {
    /// Returns `true` if and only if `self == -1`.
    ///
    /// Always `false` for unsigned types.
    fn is_minus_one(self) -> bool;
}

macro_rules! impl_minus_one {
    (signed: $($S:ty),*; unsigned: $($U:ty),*) => {
        $(
            impl MinusOne for $S {
                #[inline(always)]
                fn is_minus_one(self) -> bool {
                    self == -1
                }
            }
        )*
        $(
            impl MinusOne for $U {
                #[inline(always)]
                fn is_minus_one(self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_minus_one!(signed: i8, i16, i32, i64; unsigned: u8, u16, u32, u64);
