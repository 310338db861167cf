//! Common-type resolution for mixed-type operations.
//!
//! Rust performs no implicit numeric promotion, so the table is written out:
//! the operand of higher rank wins regardless of signedness, and equal ranks
//! of mixed signedness resolve to the unsigned type of that rank.
//! [`IntKind::common`](crate::IntKind::common) states the same rule at run time.

use crate::integer::Integer;

/// Types that combine with `Rhs` in a binary operation.
pub trait Promote<Rhs: Integer>: Integer {
    /// The common type both operands are converted to.
    type Output: Integer;
}

/// The common type of `U` and `V`.
pub type Common<U, V> = <U as Promote<V>>::Output;

macro_rules! promote {
    ($lhs:ty => $($rhs:ty: $out:ty),* $(,)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

promote!(i8  => i8: i8,  i16: i16, i32: i32, i64: i64, u8: u8,  u16: u16, u32: u32, u64: u64);
promote!(i16 => i8: i16, i16: i16, i32: i32, i64: i64, u8: i16, u16: u16, u32: u32, u64: u64);
promote!(i32 => i8: i32, i16: i32, i32: i32, i64: i64, u8: i32, u16: i32, u32: u32, u64: u64);
promote!(i64 => i8: i64, i16: i64, i32: i64, i64: i64, u8: i64, u16: i64, u32: i64, u64: u64);
promote!(u8  => i8: u8,  i16: i16, i32: i32, i64: i64, u8: u8,  u16: u16, u32: u32, u64: u64);
promote!(u16 => i8: u16, i16: u16, i32: i32, i64: i64, u8: u16, u16: u16, u32: u32, u64: u64);
promote!(u32 => i8: u32, i16: u32, i32: u32, i64: i64, u8: u32, u16: u32, u32: u32, u64: u64);
promote!(u64 => i8: u64, i16: u64, i32: u64, i64: u64, u8: u64, u16: u64, u32: u64, u64: u64);
