//! Overflow detectors.
//!
//! Each detector receives both operands already converted into the common
//! type `C` together with the naked (modulo `2^n`) result, and either confirms
//! the naked result equals the true result or reports the crossed bound.
//!
//! A negative operand converted into an unsigned `C` is stored as `x + 2^n`.
//! Operands therefore keep their original sign, and the detectors account for
//! the one wrap-around such an operand already contributed.

use crate::error::{Bound, Operator};
use crate::integer::Integer;

/// An operand converted into the common type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operand<C> {
    pub(crate) value: C,
    pub(crate) negative: bool,
}

impl<C: Integer> Operand<C> {
    #[inline]
    pub(crate) fn convert<T: Integer>(value: T) -> Self {
        Self {
            value: C::truncate(value.widen()),
            negative: value.is_negative(),
        }
    }

    /// `|x|`; exact because a negative operand in an unsigned `C` has a lower rank.
    #[inline]
    fn magnitude(self) -> C {
        if self.negative {
            self.value.wrapping_neg()
        } else {
            self.value
        }
    }
}

/// The truncated result of `lhs op rhs`.
///
/// The caller rejects a zero divisor first.
#[inline]
pub(crate) fn naked<C: Integer>(operator: Operator, lhs: C, rhs: C) -> C {
    match operator {
        Operator::Add => lhs.wrapping_add(rhs),
        Operator::Sub => lhs.wrapping_sub(rhs),
        Operator::Mul => lhs.wrapping_mul(rhs),
        Operator::Div => lhs.wrapping_div(rhs),
    }
}

/// Runs the detector of `operator`.
#[inline]
pub(crate) fn verify<C: Integer>(
    operator: Operator,
    lhs: Operand<C>,
    rhs: Operand<C>,
    naked: C,
) -> Result<C, Bound> {
    match operator {
        Operator::Add => addition(lhs, rhs, naked),
        Operator::Sub => subtraction(lhs, rhs, naked),
        Operator::Mul => multiplication(lhs, rhs, naked),
        Operator::Div => division(lhs, rhs, naked),
    }
}

/// At most one wrap-around can happen in an addition, so the naked sum lands
/// on the wrong side of `lhs` exactly when the true sum does not fit.
#[inline]
pub(crate) fn addition<C: Integer>(
    lhs: Operand<C>,
    rhs: Operand<C>,
    naked: C,
) -> Result<C, Bound> {
    let below_lhs = naked < lhs.value;
    let expect_below = if C::SIGNED {
        rhs.negative
    } else {
        lhs.negative || rhs.negative
    };
    match (below_lhs, expect_below) {
        (true, false) => Err(Bound::Max),
        (false, true) => Err(Bound::Min),
        _ => Ok(naked),
    }
}

/// Mirror of [`addition`]: the naked difference lands above `lhs` exactly when
/// `rhs` is negative, unless the true difference does not fit.
#[inline]
pub(crate) fn subtraction<C: Integer>(
    lhs: Operand<C>,
    rhs: Operand<C>,
    naked: C,
) -> Result<C, Bound> {
    // negative minus non-negative is negative
    if !C::SIGNED && lhs.negative {
        return Err(Bound::Min);
    }
    let above_lhs = naked > lhs.value;
    match (above_lhs, rhs.negative) {
        (true, false) => Err(Bound::Min),
        (false, true) => Err(Bound::Max),
        _ => Ok(naked),
    }
}

/// A product that did not wrap divides back into its multiplicand. The only
/// wrapped product that still does is `MIN * -1 == MIN`, tested explicitly.
#[inline]
pub(crate) fn multiplication<C: Integer>(
    lhs: Operand<C>,
    rhs: Operand<C>,
    naked: C,
) -> Result<C, Bound> {
    if !C::SIGNED && (lhs.negative || rhs.negative) {
        // The true product is not positive; only zero fits.
        return if lhs.value == C::ZERO || rhs.value == C::ZERO {
            Ok(C::ZERO)
        } else {
            Err(Bound::Min)
        };
    }

    let min_times_minus_one = (lhs.value.is_minus_one()
        && rhs.value != C::ZERO
        && rhs.value == naked)
        || (rhs.value.is_minus_one() && lhs.value != C::ZERO && lhs.value == naked);
    let irreversible = rhs.value != C::ZERO && naked.wrapping_div(rhs.value) != lhs.value;

    if min_times_minus_one || irreversible {
        Err(if lhs.negative == rhs.negative {
            Bound::Max
        } else {
            Bound::Min
        })
    } else {
        Ok(naked)
    }
}

/// Only `MIN / -1` overflows a signed division.
///
/// The divisor must be non-zero.
#[inline]
pub(crate) fn division<C: Integer>(
    lhs: Operand<C>,
    rhs: Operand<C>,
    naked: C,
) -> Result<C, Bound> {
    if !C::SIGNED && (lhs.negative || rhs.negative) {
        // The true quotient is -(|lhs| / |rhs|) truncated toward zero.
        let quotient = lhs.magnitude().wrapping_div(rhs.magnitude());
        return if quotient == C::ZERO {
            Ok(C::ZERO)
        } else {
            Err(Bound::Min)
        };
    }

    if lhs.value == C::MIN && rhs.value.is_minus_one() {
        Err(Bound::Max)
    } else {
        Ok(naked)
    }
}
