//! Checked arithmetic between [`Checked`] values of possibly different types.
//!
//! Each operation converts both operands into their common type, computes the
//! naked (modulo `2^n`) result and, when the policy checks both operand types,
//! runs the operator's overflow detector. Division by zero is always an error.
//!
//! The `std::ops` impls use the process-wide policy of [`global`]; the free
//! functions take the policy explicitly.

use core::ops::{Add, Div, Mul, Sub};

use log::debug;

use crate::checked::Checked;
use crate::detect::{self, Operand};
use crate::error::{Operands, Operator, OverflowError, Result};
use crate::integer::Integer;
use crate::policy::{global, Policy};
use crate::promote::{Common, Promote};
use crate::LOG_TARGET;

fn apply<U, V>(
    operator: Operator,
    lhs: Checked<U>,
    rhs: Checked<V>,
    policy: &Policy,
) -> Result<Checked<Common<U, V>>>
where
    U: Promote<V>,
    V: Integer,
{
    let l = Operand::<Common<U, V>>::convert(lhs.get());
    let r = Operand::<Common<U, V>>::convert(rhs.get());
    let operands = || Operands::new(operator, lhs.get(), rhs.get(), <Common<U, V>>::KIND);

    if operator == Operator::Div && rhs.get().widen() == 0 {
        let err = OverflowError::DivisionByZero(operands());
        debug!(target: LOG_TARGET, "{err}");
        return Err(err);
    }

    let naked = detect::naked(operator, l.value, r.value);
    if !policy.checks_both::<U, V>() {
        return Ok(Checked::from_verified(naked));
    }

    detect::verify(operator, l, r, naked)
        .map(Checked::from_verified)
        .map_err(|bound| {
            let err = OverflowError::overflow(operands(), bound);
            debug!(target: LOG_TARGET, "{err}");
            err
        })
}

/// `lhs + rhs` in the common type of `U` and `V`.
///
/// Fails with [`OverflowError::AdditionOverflow`] if the sum does not fit.
pub fn add<U, V>(lhs: Checked<U>, rhs: Checked<V>, policy: &Policy) -> Result<Checked<Common<U, V>>>
where
    U: Promote<V>,
    V: Integer,
{
    apply(Operator::Add, lhs, rhs, policy)
}

/// `lhs - rhs` in the common type of `U` and `V`.
///
/// Fails with [`OverflowError::SubtractionOverflow`] if the difference does not fit.
pub fn subtract<U, V>(
    lhs: Checked<U>,
    rhs: Checked<V>,
    policy: &Policy,
) -> Result<Checked<Common<U, V>>>
where
    U: Promote<V>,
    V: Integer,
{
    apply(Operator::Sub, lhs, rhs, policy)
}

/// `lhs * rhs` in the common type of `U` and `V`.
///
/// Fails with [`OverflowError::MultiplicationOverflow`] if the product does not fit.
/// The check divides the naked product back, which costs noticeably more
/// than the comparisons used by [`add`] and [`subtract`].
pub fn multiply<U, V>(
    lhs: Checked<U>,
    rhs: Checked<V>,
    policy: &Policy,
) -> Result<Checked<Common<U, V>>>
where
    U: Promote<V>,
    V: Integer,
{
    apply(Operator::Mul, lhs, rhs, policy)
}

/// `lhs / rhs`, truncated toward zero, in the common type of `U` and `V`.
///
/// Fails with [`OverflowError::DivisionByZero`] if `rhs` is zero, regardless
/// of the policy, and with [`OverflowError::DivisionOverflow`] if the quotient
/// does not fit.
pub fn divide<U, V>(
    lhs: Checked<U>,
    rhs: Checked<V>,
    policy: &Policy,
) -> Result<Checked<Common<U, V>>>
where
    U: Promote<V>,
    V: Integer,
{
    apply(Operator::Div, lhs, rhs, policy)
}

macro_rules! impl_std_op {
    ($($Trait:ident, $method:ident, $operator:expr;)*) => {
        $(
            impl<U, V> $Trait<Checked<V>> for Checked<U>
            where
                U: Promote<V>,
                V: Integer,
            {
                type Output = Result<Checked<Common<U, V>>>;

                #[inline]
                fn $method(self, rhs: Checked<V>) -> Self::Output {
                    apply($operator, self, rhs, &global::snapshot())
                }
            }
        )*
    };
}

impl_std_op! {
    Add, add, Operator::Add;
    Sub, sub, Operator::Sub;
    Mul, mul, Operator::Mul;
    Div, div, Operator::Div;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Bound;

    fn c<T: Integer>(v: i64) -> Checked<T> {
        Checked::new_with(v, &Policy::new()).unwrap()
    }

    #[test]
    fn test_promotion() {
        let policy = Policy::new();
        let sum = add(c::<i8>(100), c::<i16>(100), &policy).unwrap();
        assert_eq!(sum, c::<i16>(200));

        let diff = subtract(c::<u8>(3), c::<i32>(5), &policy).unwrap();
        assert_eq!(diff.get(), -2i32);
    }

    #[test]
    fn test_mixed_signedness_errors() {
        let policy = Policy::new();
        let err = subtract(c::<u32>(3), c::<i32>(5), &policy).unwrap_err();
        assert_eq!(err.bound(), Some(Bound::Min));
        assert_eq!(err.to_string(), "u32, i32 [common: u32] op- overflow: 3-5 < 0");
    }

    #[test]
    fn test_division_by_zero_ignores_policy() {
        let policy = Policy::unchecked();
        let err = divide(c::<i8>(1), c::<i8>(0), &policy).unwrap_err();
        assert!(matches!(err, OverflowError::DivisionByZero(_)));
    }

    #[test]
    fn test_disabled_returns_naked() {
        let mut policy = Policy::new();
        policy.disable::<u8>();
        assert_eq!(multiply(c::<u8>(16), c::<u8>(16), &policy).unwrap().get(), 0);
        assert_eq!(divide(c::<i8>(-128), c::<u8>(1), &policy).unwrap().get(), 128u8);
    }
}
