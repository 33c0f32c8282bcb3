//! Signed division on top of the unsigned kernel.

use super::split;
use super::udiv::u32_div_rem;

/// Computes the quotient and remainder of `duo` divided by `div`, truncating toward zero.
///
/// The quotient takes the XOR of the operand signs. The remainder takes the sign of the
/// dividend alone, so `-17 / 5 == (-3, -2)` while `17 / -5 == (-3, 2)`.
///
/// A zero divisor returns `(0, 0)`. `i32::MIN / -1` wraps to `(i32::MIN, 0)`, the same as
/// [`i32::wrapping_div`] and [`i32::wrapping_rem`].
pub const fn i32_div_rem(duo: i32, div: i32) -> (i32, i32) {
    let (duo_sign, duo) = split(duo);
    let (div_sign, div) = split(div);
    let (quo, rem) = u32_div_rem(duo, div);
    (duo_sign.xor(div_sign).apply(quo), duo_sign.apply(rem))
}

intrinsics! {
    /// Signed 32-bit division, truncating toward zero. Returns 0 when `d == 0`.
    pub extern "C" fn __divsi3(n: i32, d: i32) -> i32 {
        i32_div_rem(n, d).0
    }

    /// Signed 32-bit remainder with the sign of `n`. Returns 0 when `d == 0`.
    pub extern "C" fn __modsi3(n: i32, d: i32) -> i32 {
        i32_div_rem(n, d).1
    }

    /// Signed 32-bit division that also stores the remainder through `rem` when it is not
    /// null. A zero divisor yields quotient 0 and remainder 0.
    pub extern "C" fn __divmodsi4(n: i32, d: i32, rem: Option<&mut i32>) -> i32 {
        let (quo, r) = i32_div_rem(n, d);
        if let Some(rem) = rem {
            *rem = r;
        }
        quo
    }
}
