//! Input generation shared by the integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

/// Random pairs per routine, on top of the edge-case cross product.
pub const N: u32 = if cfg!(debug_assertions) { 50_000 } else { 1_000_000 };

/// Operands that sit on the boundaries the kernels branch on.
pub const EDGE_U32: &[u32] = &[
    0,
    1,
    2,
    3,
    5,
    7,
    0xff,
    0x100,
    0xffff,
    0x1_0000,
    0x7fff_fffe,
    0x7fff_ffff,
    0x8000_0000,
    0x8000_0001,
    0xaaaa_aaaa,
    0x5555_5555,
    0xffff_0000,
    0xffff_fffe,
    0xffff_ffff,
];

fn rng() -> Xoshiro128StarStar {
    Xoshiro128StarStar::seed_from_u64(0x5eed_d1f0)
}

/// A random word with a random number of leading zeros, so that small operands and operands
/// of very different widths show up as often as full-width ones.
fn operand(rng: &mut Xoshiro128StarStar) -> u32 {
    let x: u32 = rng.random();
    x >> rng.random_range(0..u32::BITS)
}

/// Calls `f` on every pair of [`EDGE_U32`] operands and then on `n` random pairs.
pub fn fuzz_2<F: FnMut(u32, u32)>(n: u32, mut f: F) {
    for &a in EDGE_U32 {
        for &b in EDGE_U32 {
            f(a, b);
        }
    }

    let mut rng = rng();
    for _ in 0..n {
        let a = operand(&mut rng);
        let b = operand(&mut rng);
        f(a, b);
    }
}

/// Like [`fuzz_2`], reinterpreting the operands as `i32` and also trying each sign.
pub fn fuzz_2_signed<F: FnMut(i32, i32)>(n: u32, mut f: F) {
    fuzz_2(n, |a, b| {
        let (a, b) = (a as i32, b as i32);
        f(a, b);
        f(a.wrapping_neg(), b);
        f(a, b.wrapping_neg());
        f(a.wrapping_neg(), b.wrapping_neg());
    });
}
