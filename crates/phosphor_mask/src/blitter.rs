//! Fragment-shader-style drawing into surfaces.
//!
//! [`Blitter`] fills a [`Surface`] from a closure that receives a
//! [`LocalFragment`] per pixel, with rows spread over the rayon pool. Each row
//! writes only its own slice.
//!
//! [`render_mask`] and [`render_mask_rgba`] are the mask-specific entry points.
//! Both sample mask space at integer pixel corners: pixel `(x, y)` is evaluated
//! at `origin + (x, y)`, not at the pixel center.

use bevy::math::{Vec2, Vec3};
use rayon::prelude::*;

use crate::mask::MaskParams;
use crate::surface::{Rgba, Surface};

/// Per-pixel data passed to blit callbacks.
#[derive(Clone, Copy, Debug)]
pub struct LocalFragment {
  /// Column on the surface.
  pub x: u32,
  /// Row on the surface, top row is 0.
  pub y: u32,
}

impl LocalFragment {
  /// Mask-space coordinate of this pixel's corner, offset by `origin`.
  #[inline]
  pub fn corner(self, origin: Vec2) -> Vec2 {
    origin + Vec2::new(self.x as f32, self.y as f32)
  }
}

/// Drawing API for surfaces.
pub struct Blitter<'a, T> {
  surface: &'a mut Surface<T>,
}

impl<'a, T: Send> Blitter<'a, T> {
  pub fn new(surface: &'a mut Surface<T>) -> Self {
    Self { surface }
  }

  /// Overwrites every pixel with `f` of its fragment, rows in parallel.
  pub fn blit<F>(&mut self, f: F)
  where
    F: Fn(LocalFragment) -> T + Sync,
  {
    let stride = self.surface.width() as usize;
    if stride == 0 {
      return;
    }

    self
      .surface
      .as_mut_slice()
      .par_chunks_mut(stride)
      .enumerate()
      .for_each(|(y, row)| {
        for (x, value) in row.iter_mut().enumerate() {
          *value = f(LocalFragment {
            x: x as u32,
            y: y as u32,
          });
        }
      });
  }
}

/// Renders mask weights into `surface`, pixel `(x, y)` sampling mask space at
/// `origin + (x, y)`.
pub fn render_mask(surface: &mut Surface<Vec3>, params: &MaskParams, origin: Vec2) {
  Blitter::new(surface).blit(|frag| params.sample(frag.corner(origin)));
}

/// Renders quantized mask weights into an RGBA surface.
pub fn render_mask_rgba(surface: &mut Surface<Rgba>, params: &MaskParams, origin: Vec2) {
  Blitter::new(surface).blit(|frag| Rgba::from_weight(params.sample(frag.corner(origin))));
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pattern::MaskPattern;
  use crate::slot::SlotOverlay;

  #[test]
  fn blit_visits_every_pixel_once() {
    let mut surface: Surface<u32> = Surface::new(7, 5);
    Blitter::new(&mut surface).blit(|f| f.y * 100 + f.x);

    for y in 0..5 {
      for x in 0..7 {
        assert_eq!(surface[(x, y)], y * 100 + x);
      }
    }
  }

  #[test]
  fn blit_on_empty_surface_is_noop() {
    let mut surface: Surface<u32> = Surface::new(0, 4);
    Blitter::new(&mut surface).blit(|_| 1);
    assert!(surface.as_slice().is_empty());
  }

  #[test]
  fn render_mask_matches_per_pixel_sampling() {
    let params = MaskParams::new(MaskPattern::SlotPentile, 0.15)
      .with_stagger(-2)
      .with_slot(SlotOverlay::new(3));
    let origin = Vec2::new(-7.0, 3.0);

    let mut surface = Surface::<Vec3>::new(37, 23);
    render_mask(&mut surface, &params, origin);

    for y in 0..surface.height() {
      for x in 0..surface.width() {
        let expected = params.sample(origin + Vec2::new(x as f32, y as f32));
        assert_eq!(surface[(x, y)], expected, "pixel ({x}, {y})");
      }
    }
  }

  #[test]
  fn render_mask_rgba_quantizes() {
    let params = MaskParams::new(MaskPattern::Rycb, 0.0);
    let mut surface = Surface::<Rgba>::new(4, 1);
    render_mask_rgba(&mut surface, &params, Vec2::ZERO);
    assert_eq!(
      surface.as_slice(),
      &[
        Rgba::rgb(255, 0, 0),
        Rgba::rgb(255, 255, 0),
        Rgba::rgb(0, 255, 255),
        Rgba::rgb(0, 0, 255),
      ]
    );
  }
}
