//! Procedural CRT phosphor masks.
//!
//! Produces the per-pixel RGB multiplier that makes an upscaled image look
//! like it sits behind a physical display mask. Three topologies are
//! available (see [`MaskPattern`]), with optional brick staggering
//! ([`Stagger`]) and slot gaps ([`SlotOverlay`]).
//!
//! The core is [`mask`], a pure function meant to run once per output pixel:
//!
//! ```
//! use bevy::math::{Vec2, Vec3};
//! use phosphor_mask::mask;
//!
//! let weight = mask(Vec2::new(0.3, 0.0), 0.2, 0, 0);
//! assert_eq!(weight, Vec3::new(1.0, 0.2, 1.0));
//! ```
//!
//! Coordinates are in mask space: one unit is one phosphor column. Mapping
//! screen pixels into that space is up to the caller.
//!
//! For CPU rendering, [`render_mask`] fills a [`Surface`] in parallel. With
//! Bevy, [`PhosphorMaskPlugin`] keeps a tiling texture of the mask in sync
//! with a [`MaskConfig`] resource.

pub mod blitter;
pub mod config;
pub mod mask;
pub mod math;
pub mod pattern;
pub mod plugin;
pub mod render;
pub mod slot;
pub mod stagger;
pub mod surface;

pub use blitter::{Blitter, LocalFragment, render_mask, render_mask_rgba};
pub use config::{ConfigError, MaskConfig};
pub use mask::{MAX_TILE_SIZE, MaskParams, TileTooLarge, apply_mask, mask};
pub use pattern::MaskPattern;
pub use plugin::{MaskTexture, PhosphorMaskPlugin};
pub use render::{create_mask_texture, mask_image, render_tile, upload_surface};
pub use slot::SlotOverlay;
pub use stagger::Stagger;
pub use surface::{Rgba, RgbaSurface, Surface};
