use core::fmt;

/// Run-time descriptor of a supported fixed-width integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
}

impl IntKind {
    /// Every supported type, signed ones first.
    pub const ALL: [IntKind; 8] = [
        IntKind::I8,
        IntKind::I16,
        IntKind::I32,
        IntKind::I64,
        IntKind::U8,
        IntKind::U16,
        IntKind::U32,
        IntKind::U64,
    ];

    /// Width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            IntKind::I8 | IntKind::U8 => 8,
            IntKind::I16 | IntKind::U16 => 16,
            IntKind::I32 | IntKind::U32 => 32,
            IntKind::I64 | IntKind::U64 => 64,
        }
    }

    /// Whether the type is signed.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64
        )
    }

    /// Conversion rank; only the width matters, signedness never does.
    #[inline]
    pub const fn rank(self) -> u32 {
        self.bits().trailing_zeros() - 2
    }

    /// The unsigned type of the same rank.
    #[inline]
    pub const fn to_unsigned(self) -> IntKind {
        match self {
            IntKind::I8 | IntKind::U8 => IntKind::U8,
            IntKind::I16 | IntKind::U16 => IntKind::U16,
            IntKind::I32 | IntKind::U32 => IntKind::U32,
            IntKind::I64 | IntKind::U64 => IntKind::U64,
        }
    }

    /// The common type of `self` and `other` under the usual arithmetic conversions.
    ///
    /// The higher rank wins regardless of signedness. On equal rank, mixed
    /// signedness resolves to the unsigned type of that rank.
    ///
    /// ```
    /// use overflow_checked::IntKind;
    ///
    /// assert_eq!(IntKind::I8.common(IntKind::I16), IntKind::I16);
    /// assert_eq!(IntKind::U8.common(IntKind::I16), IntKind::I16);
    /// assert_eq!(IntKind::I32.common(IntKind::U32), IntKind::U32);
    /// ```
    pub const fn common(self, other: IntKind) -> IntKind {
        if self.rank() > other.rank() {
            self
        } else if other.rank() > self.rank() {
            other
        } else if self.is_signed() == other.is_signed() {
            self
        } else {
            self.to_unsigned()
        }
    }

    /// Smallest representable value, widened.
    pub const fn min(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest representable value, widened.
    pub const fn max(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// The Rust spelling of the type.
    pub const fn name(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
        }
    }

    /// Single-bit mask used by packed per-type switches.
    #[inline]
    pub(crate) const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
