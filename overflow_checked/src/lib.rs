#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Fixed-width integers that detect arithmetic overflow where it happens.
//!
//! A [`Checked<T>`] is validated on construction and routes `+`, `-`, `*`
//! and `/` through overflow detectors. Operands of different types are first
//! converted to their common type ([`Promote`]); the result either equals the
//! mathematical result exactly or the operation fails with an [`OverflowError`].
//!
//! ```
//! use overflow_checked::{ops, Checked, OverflowError, Policy};
//!
//! let policy = Policy::default();
//! let a = Checked::<i8>::new_with(-128, &policy)?;
//! let b = Checked::<i8>::new_with(-1, &policy)?;
//! assert!(matches!(
//!     ops::multiply(a, b, &policy),
//!     Err(OverflowError::MultiplicationOverflow(_))
//! ));
//! # Ok::<(), OverflowError>(())
//! ```

pub mod error;
pub mod integer;
pub mod native;
pub mod ops;
pub mod policy;
pub mod promote;
pub mod validate;

mod checked;
mod detect;

pub use checked::Checked;
pub use error::{Bound, Operands, Operator, OverflowError, Result, Violation};
pub use integer::{IntKind, Integer};
pub use policy::{Checks, Policy, CHECKS_ON_BY_DEFAULT, SKIP_INITIALIZATION_CHECK};
pub use promote::{Common, Promote};
pub use validate::RawValue;

pub(crate) const LOG_TARGET: &str = "overflow_checked";

/// Checked `i8`.
pub type I8o = Checked<i8>;
/// Checked `i16`.
pub type I16o = Checked<i16>;
/// Checked `i32`.
pub type I32o = Checked<i32>;
/// Checked `i64`.
pub type I64o = Checked<i64>;
/// Checked `u8`.
pub type U8o = Checked<u8>;
/// Checked `u16`.
pub type U16o = Checked<u16>;
/// Checked `u32`.
pub type U32o = Checked<u32>;
/// Checked `u64`.
pub type U64o = Checked<u64>;
