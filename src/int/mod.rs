//! 32-bit integer intrinsics.

pub mod mul;
pub mod sdiv;
pub mod udiv;

/// Most significant bit of a 32-bit word.
pub(crate) const TOP_BIT: u32 = 1 << (u32::BITS - 1);

/// Sign of a signed operand, or of a result once the operand signs are combined.
///
/// The signed routines strip signs off, run an unsigned kernel on the magnitudes and put a
/// `Sign` back on the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Zero counts as positive.
    #[inline]
    pub(crate) const fn of(x: i32) -> Self {
        if x < 0 { Sign::Negative } else { Sign::Positive }
    }

    /// Sign of a product or quotient whose operands have signs `self` and `other`.
    #[inline]
    pub(crate) const fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => Sign::Negative,
        }
    }

    /// Reattaches the sign to an unsigned magnitude, wrapping the way two's complement does.
    ///
    /// A magnitude of `2^31` comes back as `i32::MIN` under either sign.
    #[inline]
    pub(crate) const fn apply(self, magnitude: u32) -> i32 {
        match self {
            Sign::Positive => magnitude as i32,
            Sign::Negative => (magnitude as i32).wrapping_neg(),
        }
    }
}

/// Splits `x` into its sign and magnitude. `i32::MIN` maps to a magnitude of exactly `2^31`.
#[inline]
pub(crate) const fn split(x: i32) -> (Sign, u32) {
    (Sign::of(x), x.unsigned_abs())
}
