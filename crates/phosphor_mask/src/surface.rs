//! Pixel buffers for rendered masks.
//!
//! A [`Surface`] is a generic 2D buffer. Masks are rendered into a
//! `Surface<Vec3>` of raw weights, or straight into an [`RgbaSurface`] for
//! texture upload.

use std::ops::{Index, IndexMut};

use bevy::math::Vec3;

/// A 2D buffer of elements.
///
/// Data is stored in row-major order (y * width + x).
pub struct Surface<T> {
  data: Box<[T]>,
  width: u32,
  height: u32,
}

impl<T: Clone + Default> Surface<T> {
  /// Creates a new surface filled with the default value.
  pub fn new(width: u32, height: u32) -> Self {
    let len = (width as usize) * (height as usize);
    Self {
      data: vec![T::default(); len].into_boxed_slice(),
      width,
      height,
    }
  }
}

impl<T> Surface<T> {
  #[inline]
  pub fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.height
  }

  /// All elements in row-major order.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Mutable access to all elements in row-major order.
  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  #[inline]
  fn offset(&self, x: u32, y: u32) -> usize {
    debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
    (y as usize) * (self.width as usize) + (x as usize)
  }
}

impl Surface<Rgba> {
  /// Raw RGBA8 bytes, row-major, for texture upload.
  pub fn as_bytes(&self) -> &[u8] {
    let ptr = self.data.as_ptr() as *const u8;
    let len = self.data.len() * std::mem::size_of::<Rgba>();
    // SAFETY: Rgba is repr(C) with four u8 fields and no padding.
    unsafe { std::slice::from_raw_parts(ptr, len) }
  }
}

impl<T> Index<(u32, u32)> for Surface<T> {
  type Output = T;

  #[inline]
  fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
    &self.data[self.offset(x, y)]
  }
}

impl<T> IndexMut<(u32, u32)> for Surface<T> {
  #[inline]
  fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Self::Output {
    let i = self.offset(x, y);
    &mut self.data[i]
  }
}

/// Opaque RGBA8 mask texel.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Rgba {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Rgba {
  /// Opaque RGB pixel (alpha = 255).
  #[inline]
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  /// Quantizes a mask weight to an opaque pixel.
  ///
  /// Channels are clamped to `[0, 1]` first, so weights from a `dark` outside
  /// that range saturate instead of wrapping.
  #[inline]
  pub fn from_weight(weight: Vec3) -> Self {
    let q = (weight.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    Self::rgb(q.x as u8, q.y as u8, q.z as u8)
  }
}

/// A surface containing RGBA pixels, suitable for GPU upload.
pub type RgbaSurface = Surface<Rgba>;
