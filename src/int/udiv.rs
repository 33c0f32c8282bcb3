//! Unsigned restoring division.

use super::TOP_BIT;

/// Computes the quotient and remainder of `duo` divided by `div`.
///
/// Restoring binary long division. The divisor is first shifted up until it is no longer
/// below the dividend (or until its top bit is set), tracking the shift as a one-bit mask.
/// Then, walking the mask back down, the shifted divisor is subtracted wherever it fits and
/// the mask bit is set in the quotient. The walk ends early once the dividend is used up.
///
/// A zero divisor returns `(0, 0)` instead of trapping.
pub const fn u32_div_rem(mut duo: u32, mut div: u32) -> (u32, u32) {
    if div == 0 {
        return (0, 0);
    }

    let mut mask: u32 = 1;
    while div < duo && div & TOP_BIT == 0 {
        mask <<= 1;
        div <<= 1;
    }

    let mut quo: u32 = 0;
    while duo != 0 && mask != 0 {
        if div <= duo {
            duo -= div;
            quo |= mask;
        }
        mask >>= 1;
        div >>= 1;
    }

    (quo, duo)
}

intrinsics! {
    /// Unsigned 32-bit division, truncating. Returns 0 when `d == 0`.
    pub extern "C" fn __udivsi3(n: u32, d: u32) -> u32 {
        u32_div_rem(n, d).0
    }

    /// Unsigned 32-bit remainder. Returns 0 when `d == 0`.
    pub extern "C" fn __umodsi3(n: u32, d: u32) -> u32 {
        u32_div_rem(n, d).1
    }

    /// Unsigned 32-bit division that also stores the remainder through `rem` when it is not
    /// null. A zero divisor yields quotient 0 and remainder 0.
    pub extern "C" fn __udivmodsi4(n: u32, d: u32, rem: Option<&mut u32>) -> u32 {
        let (quo, r) = u32_div_rem(n, d);
        if let Some(rem) = rem {
            *rem = r;
        }
        quo
    }
}
