//! Phosphor layouts.
//!
//! Each [`MaskPattern`] maps a (staggered) mask-space coordinate to an RGB
//! weight. Unlit phosphors keep the dark level; lit ones go to `1.0`.
//!
//! ```text
//! MagentaGreen   SlotPentile    Rycb
//! [MG]           [MGMG]         [RYCB]
//!                [BGRK]
//!                [MGMG]
//!                [RKBG]
//! ```
//!
//! Bucket comparisons are strict `<` and the last bucket is whatever is left,
//! so a coordinate exactly on a boundary belongs to the bucket on its right.

use bevy::math::{UVec2, Vec2, Vec3};

use crate::math::{fract, lcm, modulo};
use crate::stagger::Stagger;

/// Phosphor topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaskPattern {
  /// Two phosphor columns per period: magenta then green (index 0).
  #[default]
  MagentaGreen,
  /// Magenta/green rows alternating with a diagonal B/G/R/off row (index 1).
  SlotPentile,
  /// Four columns: red, yellow, cyan, blue (index 2).
  Rycb,
}

impl MaskPattern {
  /// All patterns in index order.
  pub const ALL: [Self; 3] = [Self::MagentaGreen, Self::SlotPentile, Self::Rycb];

  /// Selects a pattern by index, clamping out-of-range values to `[0, 2]`.
  #[inline]
  pub const fn from_index(index: i32) -> Self {
    if index <= 0 {
      Self::MagentaGreen
    } else if index == 1 {
      Self::SlotPentile
    } else {
      Self::Rycb
    }
  }

  /// Index of this pattern.
  pub const fn index(self) -> i32 {
    match self {
      Self::MagentaGreen => 0,
      Self::SlotPentile => 1,
      Self::Rycb => 2,
    }
  }

  /// Horizontal period used by the staggering transform.
  ///
  /// `SlotPentile` reports 2 even though its lower rows repeat every 4.
  #[inline]
  pub const fn width(self) -> f32 {
    match self {
      Self::MagentaGreen | Self::SlotPentile => 2.0,
      Self::Rycb => 4.0,
    }
  }

  /// Evaluates the pattern at an already staggered coordinate.
  #[inline]
  pub fn sample(self, coord: Vec2, dark: f32) -> Vec3 {
    match self {
      Self::MagentaGreen => magenta_green(coord, dark),
      Self::SlotPentile => slot_pentile(coord, dark),
      Self::Rycb => rycb(coord, dark),
    }
  }

  /// Size in whole pixels of the smallest tile that repeats the pattern.
  ///
  /// Only exact for integer pixel coordinates; that is what a tiled texture
  /// samples.
  pub const fn tile_size(self, stagger: Stagger) -> UVec2 {
    let (w, h) = match self {
      Self::MagentaGreen => (2, 1),
      Self::SlotPentile => (4, 4),
      Self::Rycb => (4, 1),
    };
    UVec2::new(w, lcm(h, stagger.cycle()))
  }
}

/// `(1, dark, 1)` on the first column of each pair, `(dark, 1, dark)` on the
/// second.
#[inline]
fn magenta_green(coord: Vec2, dark: f32) -> Vec3 {
  if modulo(coord.x, 2.0) < 1.0 {
    Vec3::new(1.0, dark, 1.0)
  } else {
    Vec3::new(dark, 1.0, dark)
  }
}

#[inline]
fn slot_pentile(coord: Vec2, dark: f32) -> Vec3 {
  if modulo(coord.y, 2.0) < 1.0 {
    return magenta_green(coord, dark);
  }

  // Lower row: walk B, G, R, off along x, advancing two cells per row pair.
  let cell = (coord * Vec2::new(1.0, 0.5)).floor();
  let idx = fract((cell.x + cell.y * 2.0) / 4.0);

  let mut res = Vec3::splat(dark);
  if idx < 0.25 {
    res.z = 1.0;
  } else if idx < 0.5 {
    res.y = 1.0;
  } else if idx < 0.75 {
    res.x = 1.0;
  }
  res
}

#[inline]
fn rycb(coord: Vec2, dark: f32) -> Vec3 {
  let px = fract(coord.x / 4.0);

  let mut res = Vec3::splat(dark);
  if px < 0.25 {
    res.x = 1.0;
  } else if px < 0.5 {
    res.x = 1.0;
    res.y = 1.0;
  } else if px < 0.75 {
    res.y = 1.0;
    res.z = 1.0;
  } else {
    res.z = 1.0;
  }
  res
}
