//! Shift-and-add multiplication.

use super::{Sign, TOP_BIT, split};

/// Returns `a * b` modulo 2^32.
///
/// Walks the bits of `b` from the least significant upward, adding the correspondingly
/// shifted `a` for every set bit. Stops as soon as no set bits of `b` remain, so the loop runs
/// at most 32 times and not at all when `b == 0`.
#[inline]
pub const fn u32_mul(mut a: u32, mut b: u32) -> u32 {
    let mut product: u32 = 0;
    while b != 0 {
        if b & 1 != 0 {
            product = product.wrapping_add(a);
        }
        a <<= 1;
        b >>= 1;
    }
    product
}

/// Returns `a * b` modulo 2^32, and whether the full product did not fit in 32 bits.
///
/// Overflow is tracked inside the shift-and-add loop rather than by widening: the product
/// overflows if adding a partial product carries out of the accumulator, or if a set bit is
/// about to be shifted out of `a` while set bits of `b` remain to be consumed.
pub const fn u32_overflowing_mul(mut a: u32, mut b: u32) -> (u32, bool) {
    let mut product: u32 = 0;
    let mut overflow = false;
    while b != 0 {
        if b & 1 != 0 {
            let (sum, carry) = product.overflowing_add(a);
            product = sum;
            overflow |= carry;
        }
        b >>= 1;
        if b != 0 && a & TOP_BIT != 0 {
            overflow = true;
        }
        a <<= 1;
    }
    (product, overflow)
}

/// Returns `a * b` with two's complement wraparound.
///
/// The operand magnitudes go through [`u32_mul`] and the product gets the XOR of the operand
/// signs. `i32::MIN` has the magnitude `2^31`, so `i32::MIN * -1` wraps to `i32::MIN` exactly
/// like [`i32::wrapping_mul`].
#[inline]
pub const fn i32_mul(a: i32, b: i32) -> i32 {
    let (a_sign, a) = split(a);
    let (b_sign, b) = split(b);
    a_sign.xor(b_sign).apply(u32_mul(a, b))
}

/// Returns `a * b` with two's complement wraparound, and whether the true product is outside
/// the range of `i32`.
pub const fn i32_overflowing_mul(a: i32, b: i32) -> (i32, bool) {
    let (a_sign, a) = split(a);
    let (b_sign, b) = split(b);
    let sign = a_sign.xor(b_sign);
    let (magnitude, overflow) = u32_overflowing_mul(a, b);
    let limit = match sign {
        Sign::Positive => i32::MAX as u32,
        Sign::Negative => TOP_BIT,
    };
    (sign.apply(magnitude), overflow || magnitude > limit)
}

intrinsics! {
    /// Unsigned 32-bit multiplication, wrapping on overflow.
    pub extern "C" fn __umulsi3(a: u32, b: u32) -> u32 {
        u32_mul(a, b)
    }

    /// Signed 32-bit multiplication, wrapping on overflow.
    pub extern "C" fn __mulsi3(a: i32, b: i32) -> i32 {
        i32_mul(a, b)
    }

    /// Signed 32-bit multiplication that stores 1 in `oflow` if the product does not fit in
    /// an `i32` and 0 otherwise. The returned value is the wrapped product either way.
    pub extern "C" fn __mulosi4(a: i32, b: i32, oflow: &mut i32) -> i32 {
        let (product, overflow) = i32_overflowing_mul(a, b);
        *oflow = overflow as i32;
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_small() {
        assert_eq!(u32_mul(7, 6), 42);
        assert_eq!(u32_mul(0, 12345), 0);
        assert_eq!(u32_mul(12345, 0), 0);
        assert_eq!(u32_mul(1, u32::MAX), u32::MAX);
        assert_eq!(u32_mul(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn unsigned_wraps() {
        assert_eq!(u32_mul(u32::MAX, u32::MAX), 1);
        assert_eq!(u32_mul(1 << 16, 1 << 16), 0);
        assert_eq!(u32_mul(0x8000_0001, 2), 2);
    }

    #[test]
    fn signed_small() {
        assert_eq!(i32_mul(-7, 6), -42);
        assert_eq!(i32_mul(7, -6), -42);
        assert_eq!(i32_mul(-7, -6), 42);
        assert_eq!(i32_mul(0, -1), 0);
        assert_eq!(i32_mul(-1, 0), 0);
    }

    #[test]
    fn signed_most_negative_wraps() {
        assert_eq!(i32_mul(i32::MIN, -1), i32::MIN);
        assert_eq!(i32_mul(-1, i32::MIN), i32::MIN);
        assert_eq!(i32_mul(i32::MIN, 1), i32::MIN);
        assert_eq!(i32_mul(i32::MIN, 2), 0);
        assert_eq!(i32_mul(i32::MIN, i32::MIN), 0);
    }

    #[test]
    fn unsigned_overflow_flag() {
        assert_eq!(u32_overflowing_mul(0xffff, 0x10001), (0xffff_ffff, false));
        assert_eq!(u32_overflowing_mul(0x1_0000, 0x1_0000), (0, true));
        assert_eq!(u32_overflowing_mul(u32::MAX, 1), (u32::MAX, false));
        assert_eq!(u32_overflowing_mul(u32::MAX, 2), (u32::MAX - 1, true));
        assert_eq!(u32_overflowing_mul(0x8000_0000, 0), (0, false));
        assert_eq!(u32_overflowing_mul(0x8000_0000, 1), (0x8000_0000, false));
        // No single partial product overflows, only their sum does.
        assert_eq!(u32_overflowing_mul(0x6000_0000, 3), (0x2000_0000, true));
    }

    #[test]
    fn signed_overflow_flag() {
        assert_eq!(i32_overflowing_mul(i32::MIN, 1), (i32::MIN, false));
        assert_eq!(i32_overflowing_mul(i32::MIN, -1), (i32::MIN, true));
        assert_eq!(i32_overflowing_mul(-0x4000_0000, 2), (i32::MIN, false));
        assert_eq!(i32_overflowing_mul(0x4000_0000, 2), (i32::MIN, true));
        assert_eq!(i32_overflowing_mul(i32::MAX, -1), (-i32::MAX, false));
        assert_eq!(i32_overflowing_mul(0, i32::MIN), (0, false));
    }

    #[test]
    fn mulosi4_sets_flag() {
        let mut oflow = 7;
        assert_eq!(__mulosi4(6, 7, &mut oflow), 42);
        assert_eq!(oflow, 0);
        assert_eq!(__mulosi4(i32::MAX, 2, &mut oflow), -2);
        assert_eq!(oflow, 1);
    }
}
