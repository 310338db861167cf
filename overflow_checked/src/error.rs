//! This module defines the errors that
//! may occur while constructing or operating on checked integers.

use core::fmt;

use thiserror::Error;

use crate::integer::{IntKind, Integer};

/// Result type of every fallible operation in this crate.
pub type Result<T, E = OverflowError> = core::result::Result<T, E>;

/// Arithmetic operator that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// The operator's symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which bound of the common type the true result crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The true result is below the minimum.
    Min,
    /// The true result is above the maximum.
    Max,
}

/// Operands of a failed operation, with their types and the common type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operands {
    /// The operator applied.
    pub operator: Operator,
    /// Left operand, widened.
    pub lhs: i128,
    /// Right operand, widened.
    pub rhs: i128,
    /// Type of the left operand.
    pub lhs_kind: IntKind,
    /// Type of the right operand.
    pub rhs_kind: IntKind,
    /// Common type the operation was carried out in.
    pub common: IntKind,
}

impl Operands {
    pub(crate) fn new<U: Integer, V: Integer>(
        operator: Operator,
        lhs: U,
        rhs: V,
        common: IntKind,
    ) -> Self {
        Self {
            operator,
            lhs: lhs.widen(),
            rhs: rhs.widen(),
            lhs_kind: U::KIND,
            rhs_kind: V::KIND,
            common,
        }
    }
}

/// Prints the operand types, e.g. `i8` or `i8, u16 [common: u16]`.
impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lhs_kind == self.rhs_kind {
            write!(f, "{}", self.lhs_kind)
        } else {
            write!(
                f,
                "{}, {} [common: {}]",
                self.lhs_kind, self.rhs_kind, self.common
            )
        }
    }
}

/// A result that does not fit its common type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    /// The operation that overflowed.
    pub operands: Operands,
    /// The bound that was crossed.
    pub bound: Bound,
    /// Value of the crossed bound in the common type.
    pub limit: i128,
}

impl Violation {
    pub(crate) fn new(operands: Operands, bound: Bound) -> Self {
        let limit = match bound {
            Bound::Min => operands.common.min(),
            Bound::Max => operands.common.max(),
        };
        Self {
            operands,
            bound,
            limit,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Operands {
            operator, lhs, rhs, ..
        } = self.operands;
        let cmp = match self.bound {
            Bound::Min => '<',
            Bound::Max => '>',
        };
        write!(
            f,
            "{} op{operator} overflow: {lhs}{operator}{rhs} {cmp} {}",
            self.operands, self.limit
        )
    }
}

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverflowError {
    /// Error that occurs when a raw value is not representable in the target type.
    #[error("{target} initialization overflow: {value} is not in range {min}..{max}")]
    InitializationOutOfRange {
        /// The type being constructed.
        target: IntKind,
        /// The rejected raw value.
        value: String,
        /// Minimum of the target type.
        min: i128,
        /// Maximum of the target type.
        max: i128,
    },
    /// Error that occurs when a sum does not fit the common type.
    #[error("{0}")]
    AdditionOverflow(Violation),
    /// Error that occurs when a difference does not fit the common type.
    #[error("{0}")]
    SubtractionOverflow(Violation),
    /// Error that occurs when a product does not fit the common type.
    #[error("{0}")]
    MultiplicationOverflow(Violation),
    /// Error that occurs when a quotient does not fit the common type.
    #[error("{0}")]
    DivisionOverflow(Violation),
    /// Error that occurs when the divisor is zero.
    #[error("{} op/ division by zero: {}/{}", .0, .0.lhs, .0.rhs)]
    DivisionByZero(Operands),
}

impl OverflowError {
    pub(crate) fn overflow(operands: Operands, bound: Bound) -> Self {
        let violation = Violation::new(operands, bound);
        match operands.operator {
            Operator::Add => OverflowError::AdditionOverflow(violation),
            Operator::Sub => OverflowError::SubtractionOverflow(violation),
            Operator::Mul => OverflowError::MultiplicationOverflow(violation),
            Operator::Div => OverflowError::DivisionOverflow(violation),
        }
    }

    /// The operator that failed, or `None` for a construction error.
    pub fn operator(&self) -> Option<Operator> {
        self.operands().map(|operands| operands.operator)
    }

    /// Operands of a failed operation, or `None` for a construction error.
    pub fn operands(&self) -> Option<&Operands> {
        match self {
            OverflowError::InitializationOutOfRange { .. } => None,
            OverflowError::AdditionOverflow(v)
            | OverflowError::SubtractionOverflow(v)
            | OverflowError::MultiplicationOverflow(v)
            | OverflowError::DivisionOverflow(v) => Some(&v.operands),
            OverflowError::DivisionByZero(operands) => Some(operands),
        }
    }

    /// The bound crossed by an overflowing operation.
    pub fn bound(&self) -> Option<Bound> {
        match self {
            OverflowError::AdditionOverflow(v)
            | OverflowError::SubtractionOverflow(v)
            | OverflowError::MultiplicationOverflow(v)
            | OverflowError::DivisionOverflow(v) => Some(v.bound),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type_message() {
        let operands = Operands::new(Operator::Add, 127i8, 1i8, IntKind::I8);
        let err = OverflowError::overflow(operands, Bound::Max);
        assert_eq!(err.to_string(), "i8 op+ overflow: 127+1 > 127");
    }

    #[test]
    fn test_mixed_type_message() {
        let operands = Operands::new(Operator::Sub, 0i8, 1u8, IntKind::U8);
        let err = OverflowError::overflow(operands, Bound::Min);
        assert_eq!(
            err.to_string(),
            "i8, u8 [common: u8] op- overflow: 0-1 < 0"
        );
        assert_eq!(err.bound(), Some(Bound::Min));
        assert_eq!(err.operator(), Some(Operator::Sub));
    }

    #[test]
    fn test_division_by_zero_message() {
        let operands = Operands::new(Operator::Div, 1i32, 0i32, IntKind::I32);
        let err = OverflowError::DivisionByZero(operands);
        assert_eq!(err.to_string(), "i32 op/ division by zero: 1/0");
        assert_eq!(err.bound(), None);
    }

    #[test]
    fn test_initialization_message() {
        let err = OverflowError::InitializationOutOfRange {
            target: IntKind::I8,
            value: "300".to_string(),
            min: -128,
            max: 127,
        };
        assert_eq!(
            err.to_string(),
            "i8 initialization overflow: 300 is not in range -128..127"
        );
        assert_eq!(err.operator(), None);
    }
}
