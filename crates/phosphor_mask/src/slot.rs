//! Slot-mask row gaps.
//!
//! Physical slot masks separate vertically stacked phosphor triads with thin
//! dark bars. The bars of neighbouring column groups are offset by half a cell,
//! giving the familiar brick layout. [`SlotOverlay`] darkens those bars on top
//! of any [`MaskPattern`](crate::MaskPattern).

use bevy::math::{UVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::modulo;

/// Dark horizontal gaps every `height + 1` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotOverlay {
  /// Lit rows between two gaps.
  pub height: u32,
}

impl SlotOverlay {
  pub const fn new(height: u32) -> Self {
    Self { height }
  }

  /// Returns true if `coord` falls on a gap row.
  ///
  /// Columns `[0, width)` of each `2 * width` group have their gap on the first
  /// row of the cell, columns `[width, 2 * width)` halfway down.
  #[inline]
  pub fn is_gap(self, coord: Vec2, width: f32) -> bool {
    let h = self.height as f32 + 1.0;
    let px = modulo(coord.x, 2.0 * width);
    let py = modulo(coord.y, h).floor();
    if px < width {
      py == 0.0
    } else {
      py == (h * 0.5).floor()
    }
  }

  /// Lowers every channel to at most `dark` on gap rows.
  #[inline]
  pub fn darken(self, color: Vec3, coord: Vec2, width: f32, dark: f32) -> Vec3 {
    if self.is_gap(coord, width) {
      color.min(Vec3::splat(dark))
    } else {
      color
    }
  }

  /// Repeat period in pixels for a pattern of the given width.
  pub const fn period(self, width: u32) -> UVec2 {
    UVec2::new(2 * width, self.height.saturating_add(1))
  }
}
