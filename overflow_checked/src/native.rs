//! Same-type detection through the processor's carry and overflow flags.
//!
//! These functions follow the contract of [`ops`](crate::ops) for operands of
//! one type and return identical errors. They are not used by the operators.

use log::debug;

use crate::checked::Checked;
use crate::error::{Bound, Operands, Operator, OverflowError, Result};
use crate::integer::Integer;
use crate::policy::Policy;
use crate::LOG_TARGET;

fn finish<T: Integer>(
    operator: Operator,
    lhs: Checked<T>,
    rhs: Checked<T>,
    policy: &Policy,
    (naked, overflowed): (T, bool),
    bound: impl FnOnce() -> Bound,
) -> Result<Checked<T>> {
    if overflowed && policy.is_enabled::<T>() {
        let operands = Operands::new(operator, lhs.get(), rhs.get(), T::KIND);
        let err = OverflowError::overflow(operands, bound());
        debug!(target: LOG_TARGET, "{err}");
        return Err(err);
    }
    Ok(Checked::from_verified(naked))
}

/// `lhs + rhs`, detected by the carry (unsigned) or overflow (signed) flag.
pub fn add<T: Integer>(lhs: Checked<T>, rhs: Checked<T>, policy: &Policy) -> Result<Checked<T>> {
    let flagged = lhs.get().overflowing_add(rhs.get());
    finish(Operator::Add, lhs, rhs, policy, flagged, || {
        if rhs.get().is_negative() {
            Bound::Min
        } else {
            Bound::Max
        }
    })
}

/// `lhs - rhs`, detected by the borrow (unsigned) or overflow (signed) flag.
pub fn subtract<T: Integer>(
    lhs: Checked<T>,
    rhs: Checked<T>,
    policy: &Policy,
) -> Result<Checked<T>> {
    let flagged = lhs.get().overflowing_sub(rhs.get());
    finish(Operator::Sub, lhs, rhs, policy, flagged, || {
        if rhs.get().is_negative() {
            Bound::Max
        } else {
            Bound::Min
        }
    })
}

/// `lhs * rhs`, detected by the overflow flag of the widening multiply.
pub fn multiply<T: Integer>(
    lhs: Checked<T>,
    rhs: Checked<T>,
    policy: &Policy,
) -> Result<Checked<T>> {
    let flagged = lhs.get().overflowing_mul(rhs.get());
    finish(Operator::Mul, lhs, rhs, policy, flagged, || {
        if lhs.get().is_negative() == rhs.get().is_negative() {
            Bound::Max
        } else {
            Bound::Min
        }
    })
}
