//! Mask evaluation.
//!
//! [`mask`] is the per-pixel entry point: clamp the pattern index, stagger the
//! coordinate, look up the phosphor. [`MaskParams`] bundles the same inputs
//! with the optional slot gaps and the blend strength used when applying the
//! mask to an image.

use bevy::math::{UVec2, Vec2, Vec3};

use crate::math::lcm;
use crate::pattern::MaskPattern;
use crate::slot::SlotOverlay;
use crate::stagger::Stagger;

/// Evaluates the phosphor mask at `coord`.
///
/// `pattern` is clamped to `[0, 2]`. `dark` is used as given, so values
/// outside `[0, 1]` give out-of-range but well-defined weights.
#[inline]
pub fn mask(coord: Vec2, dark: f32, pattern: i32, stagger: i32) -> Vec3 {
  let pattern = MaskPattern::from_index(pattern);
  let coord = Stagger(stagger).apply(coord, pattern.width());
  pattern.sample(coord, dark)
}

/// Multiplies `color` by `mask`, faded toward white by `1 - amount`.
///
/// `amount = 0` leaves the color untouched, `amount = 1` applies the full mask.
#[inline]
pub fn apply_mask(color: Vec3, mask: Vec3, amount: f32) -> Vec3 {
  color * ((1.0 - amount) + mask * amount)
}

/// Largest tile edge, in pixels, that will be rendered into a texture.
///
/// Matches the minimum 2D texture dimension wgpu guarantees by default.
pub const MAX_TILE_SIZE: u32 = 8192;

/// A repeat tile wider or taller than [`MAX_TILE_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileTooLarge {
  /// The requested tile; an axis at `u32::MAX` overflowed.
  pub size: UVec2,
}

impl std::fmt::Display for TileTooLarge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "mask tile {}x{} exceeds {} pixels",
      self.size.x, self.size.y, MAX_TILE_SIZE
    )
  }
}

impl std::error::Error for TileTooLarge {}

/// Full set of per-pixel mask inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskParams {
  pub pattern: MaskPattern,
  /// Weight of unlit phosphors.
  pub dark: f32,
  pub stagger: Stagger,
  /// Optional slot gaps drawn over the pattern.
  pub slot: Option<SlotOverlay>,
  /// Blend amount for [`MaskParams::apply`].
  pub strength: f32,
}

impl Default for MaskParams {
  fn default() -> Self {
    Self {
      pattern: MaskPattern::default(),
      dark: 0.5,
      stagger: Stagger::NONE,
      slot: None,
      strength: 0.3,
    }
  }
}

impl MaskParams {
  /// Creates params for `pattern` with the given dark level and defaults
  /// for everything else.
  pub fn new(pattern: MaskPattern, dark: f32) -> Self {
    Self {
      pattern,
      dark,
      ..Default::default()
    }
  }

  pub fn with_stagger(mut self, stagger: impl Into<Stagger>) -> Self {
    self.stagger = stagger.into();
    self
  }

  pub fn with_slot(mut self, slot: SlotOverlay) -> Self {
    self.slot = Some(slot);
    self
  }

  pub fn with_strength(mut self, strength: f32) -> Self {
    self.strength = strength;
    self
  }

  /// Evaluates the mask weight at `coord`.
  ///
  /// Without a slot overlay this equals
  /// `mask(coord, dark, pattern.index(), stagger.0)`.
  #[inline]
  pub fn sample(&self, coord: Vec2) -> Vec3 {
    let width = self.pattern.width();
    let coord = self.stagger.apply(coord, width);
    let weight = self.pattern.sample(coord, self.dark);
    match self.slot {
      Some(slot) => slot.darken(weight, coord, width, self.dark),
      None => weight,
    }
  }

  /// Applies the mask at `coord` to `color` using [`Self::strength`].
  #[inline]
  pub fn apply(&self, color: Vec3, coord: Vec2) -> Vec3 {
    apply_mask(color, self.sample(coord), self.strength)
  }

  /// Smallest integer-pixel tile that repeats [`Self::sample`].
  ///
  /// Axes saturate at `u32::MAX`; a saturated size is not a real period, so
  /// anything meant for rendering goes through [`Self::checked_tile_size`].
  pub fn tile_size(&self) -> UVec2 {
    let base = self.pattern.tile_size(self.stagger);
    match self.slot {
      Some(slot) => {
        let period = slot.period(self.pattern.width() as u32);
        UVec2::new(lcm(base.x, period.x), lcm(base.y, period.y))
      }
      None => base,
    }
  }

  /// [`Self::tile_size`], or an error if it exceeds [`MAX_TILE_SIZE`].
  pub fn checked_tile_size(&self) -> Result<UVec2, TileTooLarge> {
    let size = self.tile_size();
    if size.max_element() > MAX_TILE_SIZE {
      Err(TileTooLarge { size })
    } else {
      Ok(size)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn params_without_slot_match_free_function() {
    for pattern in MaskPattern::ALL {
      for stagger in [-3, -1, 0, 1, 2] {
        let params = MaskParams::new(pattern, 0.2).with_stagger(stagger);
        for y in -4..8 {
          for x in -4..8 {
            let coord = Vec2::new(x as f32 + 0.5, y as f32 + 0.25);
            assert_eq!(
              params.sample(coord),
              mask(coord, 0.2, pattern.index(), stagger),
              "pattern {pattern:?}, stagger {stagger}, coord {coord}"
            );
          }
        }
      }
    }
  }

  #[test]
  fn apply_mask_endpoints() {
    let color = Vec3::new(0.8, 0.6, 0.4);
    let m = Vec3::new(1.0, 0.5, 0.0);
    assert_eq!(apply_mask(color, m, 0.0), color);
    assert_eq!(apply_mask(color, m, 1.0), color * m);
    let half = apply_mask(color, m, 0.5);
    assert!((half - Vec3::new(0.8, 0.45, 0.2)).abs().max_element() < 1e-6);
  }

  #[test]
  fn apply_uses_strength_and_sample() {
    let params = MaskParams::new(MaskPattern::MagentaGreen, 0.0).with_strength(0.5);
    let color = Vec3::splat(0.8);
    // Green column at x = 1: (0, 1, 0) blended halfway.
    let out = params.apply(color, Vec2::new(1.0, 0.0));
    assert_eq!(out, Vec3::new(0.4, 0.8, 0.4));
    assert_eq!(params.with_strength(0.0).apply(color, Vec2::new(1.0, 0.0)), color);
  }

  #[test]
  fn slot_overlay_never_brightens() {
    let plain = MaskParams::new(MaskPattern::Rycb, 0.1).with_stagger(2);
    let slotted = plain.with_slot(SlotOverlay::new(2));
    for y in 0..12 {
      for x in 0..16 {
        let coord = Vec2::new(x as f32, y as f32);
        let a = plain.sample(coord);
        let b = slotted.sample(coord);
        assert!(b.cmple(a).all());
        assert!(b == a || b.max_element() <= 0.1);
      }
    }
  }

  #[test]
  fn tile_size_includes_slot_period() {
    let params = MaskParams::new(MaskPattern::MagentaGreen, 0.0).with_slot(SlotOverlay::new(2));
    assert_eq!(params.tile_size(), UVec2::new(4, 3));
    let params = MaskParams::new(MaskPattern::SlotPentile, 0.0)
      .with_stagger(3)
      .with_slot(SlotOverlay::new(3));
    assert_eq!(params.tile_size(), UVec2::new(4, 12));
  }

  #[test]
  fn checked_tile_size_rejects_oversized_tiles() {
    let params = MaskParams::new(MaskPattern::SlotPentile, 0.0).with_stagger(4096);
    assert_eq!(params.checked_tile_size(), Ok(UVec2::new(4, 8192)));

    let params = params.with_stagger(4097);
    assert!(params.checked_tile_size().is_err());

    // Saturated, not a real period.
    let params = params.with_stagger(i32::MAX);
    assert_eq!(params.tile_size(), UVec2::new(4, u32::MAX));
    let err = params.checked_tile_size().unwrap_err();
    assert_eq!(err.size, UVec2::new(4, u32::MAX));
    assert!(err.to_string().contains("exceeds 8192"));

    let params = MaskParams::new(MaskPattern::Rycb, 0.0).with_slot(SlotOverlay::new(u32::MAX));
    assert!(params.checked_tile_size().is_err());
  }
}
