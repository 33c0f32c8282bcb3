//! Checked arithmetic on top of the software kernels.
//!
//! The intrinsics have to honour C semantics: a zero divisor gives 0 and an oversized
//! product wraps. Rust callers that want to see those conditions use the functions here,
//! which return the same values on success and an [`ArithError`] otherwise.

use core::fmt;

use thiserror::Error;
use tracing::debug;

use crate::int::mul::{i32_overflowing_mul, u32_overflowing_mul};
use crate::int::sdiv::i32_div_rem;
use crate::int::udiv::u32_div_rem;

/// The operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Remainder.
    Rem,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Mul => "multiply",
            Op::Div => "divide",
            Op::Rem => "calculate the remainder",
        })
    }
}

/// Why a checked operation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// The divisor of a division or remainder was zero.
    #[error("attempt to divide by zero")]
    DivisionByZero,
    /// The exact result does not fit in the operand type.
    #[error("attempt to {op} with overflow (operands {lhs} and {rhs})")]
    Overflow {
        /// The operation whose result did not fit.
        op: Op,
        /// Left operand, widened so both `u32` and `i32` operands fit.
        lhs: i64,
        /// Right operand.
        rhs: i64,
    },
}

/// Multiplies two `u32`, failing if the product needs more than 32 bits.
pub fn mul_u32(a: u32, b: u32) -> Result<u32, ArithError> {
    match u32_overflowing_mul(a, b) {
        (product, false) => Ok(product),
        (_, true) => {
            debug!(a, b, "u32 multiplication overflowed");
            Err(ArithError::Overflow { op: Op::Mul, lhs: a.into(), rhs: b.into() })
        }
    }
}

/// Multiplies two `i32`, failing if the product is outside the range of `i32`.
pub fn mul_i32(a: i32, b: i32) -> Result<i32, ArithError> {
    match i32_overflowing_mul(a, b) {
        (product, false) => Ok(product),
        (_, true) => {
            debug!(a, b, "i32 multiplication overflowed");
            Err(ArithError::Overflow { op: Op::Mul, lhs: a.into(), rhs: b.into() })
        }
    }
}

/// Divides two `u32`, failing on a zero divisor.
pub fn div_u32(n: u32, d: u32) -> Result<u32, ArithError> {
    nonzero_u32(n, d, Op::Div)?;
    Ok(u32_div_rem(n, d).0)
}

/// Remainder of two `u32`, failing on a zero divisor.
pub fn rem_u32(n: u32, d: u32) -> Result<u32, ArithError> {
    nonzero_u32(n, d, Op::Rem)?;
    Ok(u32_div_rem(n, d).1)
}

/// Divides two `i32` truncating toward zero, failing on a zero divisor and on
/// `i32::MIN / -1`.
pub fn div_i32(n: i32, d: i32) -> Result<i32, ArithError> {
    representable_i32(n, d, Op::Div)?;
    Ok(i32_div_rem(n, d).0)
}

/// Remainder of two `i32` with the sign of `n`, failing on a zero divisor and on
/// `i32::MIN % -1`, whose quotient is not representable.
pub fn rem_i32(n: i32, d: i32) -> Result<i32, ArithError> {
    representable_i32(n, d, Op::Rem)?;
    Ok(i32_div_rem(n, d).1)
}

fn nonzero_u32(n: u32, d: u32, op: Op) -> Result<(), ArithError> {
    if d == 0 {
        debug!(n, %op, "u32 division by zero");
        return Err(ArithError::DivisionByZero);
    }
    Ok(())
}

fn representable_i32(n: i32, d: i32, op: Op) -> Result<(), ArithError> {
    if d == 0 {
        debug!(n, %op, "i32 division by zero");
        return Err(ArithError::DivisionByZero);
    }
    if n == i32::MIN && d == -1 {
        debug!(n, d, %op, "i32 division overflowed");
        return Err(ArithError::Overflow { op, lhs: n.into(), rhs: d.into() });
    }
    Ok(())
}
