//! Software integer multiplication and division for 32-bit targets that have no hardware
//! multiply or divide instructions.
//!
//! The routines here are what a code generator calls in place of a `mul`, `div` or `rem`
//! instruction: `__mulsi3`, `__udivsi3`, `__modsi3` and friends. They are built from
//! additions, subtractions and shifts only:
//!
//! * multiplication is shift-and-add over the bits of the second operand ([`int::mul`]);
//! * division is restoring binary long division producing quotient and remainder together
//!   ([`int::udiv`]), wrapped by a sign adapter for the signed forms ([`int::sdiv`]).
//!
//! Everything is a pure function of its arguments: no allocation, no shared state, and at
//! most 32 loop iterations per call.
//!
//! Division by zero does not trap. Every divide and modulo routine returns 0 for a zero
//! divisor, and multiplication wraps modulo 2^32. Callers that need to observe either
//! condition use the [`checked`] API instead.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod int;

#[cfg(feature = "checked")]
pub mod checked;

pub use int::mul::{i32_mul, i32_overflowing_mul, u32_mul, u32_overflowing_mul};
pub use int::sdiv::i32_div_rem;
pub use int::udiv::u32_div_rem;
