//! Per-type switches controlling whether overflow detection runs.
//!
//! A [`Policy`] is a plain value passed into every checked operation.
//! The [`global`] module keeps a process-wide policy in atomics for the
//! `std::ops` operator impls and [`Checked::new`](crate::Checked::new).

use serde::{Deserialize, Serialize};

use crate::integer::{IntKind, Integer};

/// Whether overflow checking starts enabled for every type.
pub const CHECKS_ON_BY_DEFAULT: bool = true;

/// Whether construction trusts the caller and skips range validation.
pub const SKIP_INITIALIZATION_CHECK: bool = false;

/// One overflow-check switch per underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Checks {
    /// Checking for `i8`.
    pub i8: bool,
    /// Checking for `i16`.
    pub i16: bool,
    /// Checking for `i32`.
    pub i32: bool,
    /// Checking for `i64`.
    pub i64: bool,
    /// Checking for `u8`.
    pub u8: bool,
    /// Checking for `u16`.
    pub u16: bool,
    /// Checking for `u32`.
    pub u32: bool,
    /// Checking for `u64`.
    pub u64: bool,
}

impl Checks {
    /// Every switch set to `enabled`.
    pub const fn uniform(enabled: bool) -> Self {
        Self {
            i8: enabled,
            i16: enabled,
            i32: enabled,
            i64: enabled,
            u8: enabled,
            u16: enabled,
            u32: enabled,
            u64: enabled,
        }
    }

    /// The switch for `kind`.
    pub const fn get(&self, kind: IntKind) -> bool {
        match kind {
            IntKind::I8 => self.i8,
            IntKind::I16 => self.i16,
            IntKind::I32 => self.i32,
            IntKind::I64 => self.i64,
            IntKind::U8 => self.u8,
            IntKind::U16 => self.u16,
            IntKind::U32 => self.u32,
            IntKind::U64 => self.u64,
        }
    }

    /// Sets the switch for `kind`.
    pub fn set(&mut self, kind: IntKind, enabled: bool) {
        let slot = match kind {
            IntKind::I8 => &mut self.i8,
            IntKind::I16 => &mut self.i16,
            IntKind::I32 => &mut self.i32,
            IntKind::I64 => &mut self.i64,
            IntKind::U8 => &mut self.u8,
            IntKind::U16 => &mut self.u16,
            IntKind::U32 => &mut self.u32,
            IntKind::U64 => &mut self.u64,
        };
        *slot = enabled;
    }

    pub(crate) const fn to_bits(self) -> u8 {
        let mut bits = 0;
        let mut i = 0;
        while i < IntKind::ALL.len() {
            let kind = IntKind::ALL[i];
            if self.get(kind) {
                bits |= kind.mask();
            }
            i += 1;
        }
        bits
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        let mut checks = Self::uniform(false);
        for kind in IntKind::ALL {
            checks.set(kind, bits & kind.mask() != 0);
        }
        checks
    }
}

impl Default for Checks {
    fn default() -> Self {
        Self::uniform(CHECKS_ON_BY_DEFAULT)
    }
}

/// Overflow-checking configuration threaded into each checked operation.
///
/// ```
/// use overflow_checked::{ops, Checked, Policy};
///
/// let mut policy = Policy::default();
/// let a = Checked::<i8>::new_with(127, &policy).unwrap();
/// let b = Checked::<i8>::new_with(1, &policy).unwrap();
/// assert!(ops::add(a, b, &policy).is_err());
///
/// policy.disable::<i8>();
/// assert_eq!(ops::add(a, b, &policy).unwrap().get(), -128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Per-type overflow checking.
    pub checks: Checks,
    /// Skip range validation on construction for every type.
    pub skip_initialization_check: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy {
    /// The default policy: [`CHECKS_ON_BY_DEFAULT`] for every type and
    /// [`SKIP_INITIALIZATION_CHECK`] for construction.
    pub const fn new() -> Self {
        Self {
            checks: Checks::uniform(CHECKS_ON_BY_DEFAULT),
            skip_initialization_check: SKIP_INITIALIZATION_CHECK,
        }
    }

    /// A policy that checks nothing; every operation yields its naked result.
    pub const fn unchecked() -> Self {
        Self {
            checks: Checks::uniform(false),
            skip_initialization_check: true,
        }
    }

    /// Enables overflow checking for `T`.
    pub fn enable<T: Integer>(&mut self) -> &mut Self {
        self.checks.set(T::KIND, true);
        self
    }

    /// Disables overflow checking for `T`.
    pub fn disable<T: Integer>(&mut self) -> &mut Self {
        self.checks.set(T::KIND, false);
        self
    }

    /// Whether overflow checking is enabled for `T`.
    pub const fn is_enabled<T: Integer>(&self) -> bool {
        self.checks.get(T::KIND)
    }

    /// Enables or disables overflow checking for `kind`.
    pub fn set_enabled(&mut self, kind: IntKind, enabled: bool) -> &mut Self {
        self.checks.set(kind, enabled);
        self
    }

    /// Sets whether construction skips range validation.
    pub fn skip_initialization_check(&mut self, skip: bool) -> &mut Self {
        self.skip_initialization_check = skip;
        self
    }

    /// Whether an operation between `U` and `V` is checked.
    ///
    /// Both types must be enabled; a single disabled operand type turns the
    /// check off for that call.
    #[inline]
    pub const fn checks_both<U: Integer, V: Integer>(&self) -> bool {
        self.is_enabled::<U>() && self.is_enabled::<V>()
    }

    /// Whether constructing a `T` validates its range.
    #[inline]
    pub const fn validates<T: Integer>(&self) -> bool {
        !self.skip_initialization_check && self.is_enabled::<T>()
    }
}

/// The process-wide policy.
///
/// The per-type switches and the skip flag share one atomic word: loads use
/// `Acquire` and updates use `AcqRel`/`Release`, so neither a single toggle
/// nor an `install` is ever observed half-applied.
pub mod global {
    use std::sync::atomic::{AtomicU16, Ordering};

    use log::info;

    use super::{Checks, Policy};
    use crate::integer::Integer;
    use crate::LOG_TARGET;

    // Bits 0..8 hold `Checks`, bit 8 holds `skip_initialization_check`.
    const SKIP_INIT: u16 = 1 << 8;

    static STATE: AtomicU16 = AtomicU16::new(pack(Policy::new()));

    const fn pack(policy: Policy) -> u16 {
        let skip = if policy.skip_initialization_check {
            SKIP_INIT
        } else {
            0
        };
        policy.checks.to_bits() as u16 | skip
    }

    fn unpack(state: u16) -> Policy {
        Policy {
            checks: Checks::from_bits(state as u8),
            skip_initialization_check: state & SKIP_INIT != 0,
        }
    }

    /// Enables overflow checking for `T` process-wide.
    pub fn enable<T: Integer>() {
        STATE.fetch_or(T::KIND.mask() as u16, Ordering::AcqRel);
        info!(target: LOG_TARGET, "overflow checking enabled for {}", T::KIND);
    }

    /// Disables overflow checking for `T` process-wide.
    pub fn disable<T: Integer>() {
        STATE.fetch_and(!(T::KIND.mask() as u16), Ordering::AcqRel);
        info!(target: LOG_TARGET, "overflow checking disabled for {}", T::KIND);
    }

    /// Whether overflow checking is enabled for `T` process-wide.
    pub fn is_enabled<T: Integer>() -> bool {
        STATE.load(Ordering::Acquire) & T::KIND.mask() as u16 != 0
    }

    /// Sets whether construction skips range validation process-wide.
    pub fn set_skip_initialization_check(skip: bool) {
        if skip {
            STATE.fetch_or(SKIP_INIT, Ordering::AcqRel);
        } else {
            STATE.fetch_and(!SKIP_INIT, Ordering::AcqRel);
        }
        info!(target: LOG_TARGET, "initialization check skipping set to {skip}");
    }

    /// The current process-wide policy.
    pub fn snapshot() -> Policy {
        unpack(STATE.load(Ordering::Acquire))
    }

    /// Replaces the process-wide policy.
    pub fn install(policy: Policy) {
        STATE.store(pack(policy), Ordering::Release);
        info!(target: LOG_TARGET, "installed {policy:?}");
    }

    /// Restores the default process-wide policy.
    pub fn reset() {
        install(Policy::new());
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_independent() {
        let mut policy = Policy::new();
        policy.disable::<i32>();
        assert!(!policy.is_enabled::<i32>());
        for kind in IntKind::ALL {
            assert_eq!(policy.checks.get(kind), kind != IntKind::I32);
        }

        policy.enable::<i32>().disable::<u64>();
        assert!(policy.is_enabled::<i32>());
        assert!(!policy.is_enabled::<u64>());
        assert!(policy.is_enabled::<i64>());
    }

    #[test]
    fn test_checks_both_is_a_conjunction() {
        let mut policy = Policy::new();
        policy.disable::<i16>();
        assert!(policy.checks_both::<i8, i8>());
        assert!(!policy.checks_both::<i8, i16>());
        assert!(!policy.checks_both::<i16, i8>());
    }

    #[test]
    fn test_validates() {
        let mut policy = Policy::new();
        assert!(policy.validates::<u8>());
        policy.disable::<u8>();
        assert!(!policy.validates::<u8>());
        assert!(policy.validates::<i8>());
        policy.skip_initialization_check(true);
        assert!(!policy.validates::<i8>());
    }

    #[test]
    fn test_bits_round_trip() {
        let mut checks = Checks::default();
        checks.set(IntKind::U16, false);
        checks.set(IntKind::I8, false);
        assert_eq!(Checks::from_bits(checks.to_bits()), checks);
        assert_eq!(Checks::uniform(true).to_bits(), u8::MAX);
        assert_eq!(Checks::uniform(false).to_bits(), 0);
    }

    #[test]
    fn test_set_enabled_by_kind() {
        let mut policy = Policy::new();
        for kind in IntKind::ALL.into_iter().filter(|k| !k.is_signed()) {
            policy.set_enabled(kind, false);
        }
        assert!(policy.is_enabled::<i8>());
        assert!(policy.is_enabled::<i64>());
        assert!(!policy.is_enabled::<u8>());
        assert!(!policy.is_enabled::<u64>());
        assert!(!policy.checks_both::<i32, u32>());

        policy.set_enabled(IntKind::U32, true).set_enabled(IntKind::I32, false);
        assert!(policy.is_enabled::<u32>());
        assert!(!policy.is_enabled::<i32>());
    }

    #[test]
    fn test_unchecked() {
        let policy = Policy::unchecked();
        for kind in IntKind::ALL {
            assert!(!policy.checks.get(kind));
        }
        assert!(policy.skip_initialization_check);
    }
}
