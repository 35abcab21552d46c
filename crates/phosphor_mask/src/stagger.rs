//! Row staggering for brick-like masks.
//!
//! Rows are grouped into bands of `|stagger|` rows. Every second band is
//! shifted horizontally before the pattern lookup. Positive and negative
//! stagger use different shift formulas:
//!
//! - `stagger > 0`: `0.5 * width * floor(mod(y, 2s) / s)`, so the second band
//!   moves right by half a pattern period.
//! - `stagger < 0`: `2 * floor(mod(y, 2|s|) / s)`. The division is by the
//!   negative value itself, so the shift is a non-positive multiple of 2 and
//!   does not depend on the pattern width.
//!
//! The two formulas are not mirror images of each other.

use bevy::math::Vec2;

use crate::math::modulo;

/// Row band height for staggering; `0` disables it, the sign picks the formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stagger(pub i32);

impl Stagger {
  /// No staggering.
  pub const NONE: Self = Self(0);

  /// Horizontal shift for row `y` of a pattern with period `width`.
  #[inline]
  pub fn offset(self, y: f32, width: f32) -> f32 {
    let s = self.0 as f32;
    if self.0 > 0 {
      0.5 * width * (modulo(y, 2.0 * s) / s).floor()
    } else if self.0 < 0 {
      2.0 * (modulo(y, -2.0 * s) / s).floor()
    } else {
      0.0
    }
  }

  /// Shifts `coord.x` by [`Self::offset`]; `coord.y` is unchanged.
  #[inline]
  pub fn apply(self, coord: Vec2, width: f32) -> Vec2 {
    Vec2::new(coord.x + self.offset(coord.y, width), coord.y)
  }

  /// Number of rows after which the offsets repeat (`0` when disabled).
  pub const fn cycle(self) -> u32 {
    self.0.unsigned_abs().saturating_mul(2)
  }
}

impl From<i32> for Stagger {
  fn from(value: i32) -> Self {
    Self(value)
  }
}
