//! Shader-style scalar helpers.
//!
//! Float modulo follows GLSL `mod`: `x - m * floor(x / m)`. For a positive
//! modulus the result is never negative, so a coordinate left of the origin
//! lands in the same bucket as its translate one period to the right.

/// Floor-based float modulo.
#[inline]
pub fn modulo(x: f32, m: f32) -> f32 {
  x - m * (x / m).floor()
}

/// Fractional part relative to `floor`.
///
/// `f32::fract` truncates toward zero and goes negative for negative input;
/// this one stays in `[0, 1)`.
#[inline]
pub fn fract(x: f32) -> f32 {
  x - x.floor()
}

pub(crate) const fn gcd(mut a: u32, mut b: u32) -> u32 {
  while b != 0 {
    let t = a % b;
    a = b;
    b = t;
  }
  a
}

/// Least common multiple, saturating at `u32::MAX`; `lcm(0, n)` is `n` so a
/// disabled period is neutral.
pub(crate) const fn lcm(a: u32, b: u32) -> u32 {
  if a == 0 {
    return b;
  }
  if b == 0 {
    return a;
  }
  (a / gcd(a, b)).saturating_mul(b)
}
