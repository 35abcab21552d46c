//! GPU texture creation for mask tiles.
//!
//! The texture holds exactly one repeat tile ([`MaskParams::tile_size`]) and
//! uses a repeating, nearest-neighbor sampler, so a shader can sample it at
//! `pixel / tile_size` anywhere on screen.

use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::blitter::render_mask_rgba;
use crate::mask::{MaskParams, TileTooLarge};
use crate::surface::RgbaSurface;

/// Renders one tile of `params` into an RGBA surface.
///
/// Texel `(x, y)` holds the mask at the integer corner `(x, y)`, not at the
/// pixel center `(x + 0.5, y + 0.5)`. Negative stagger shifts rows on
/// fractional `y`, so a shader evaluating [`mask`](crate::mask()) at pixel
/// centers does not match this tile for those settings.
pub fn render_tile(params: &MaskParams) -> Result<RgbaSurface, TileTooLarge> {
  let size = params.checked_tile_size()?;
  let mut surface = RgbaSurface::new(size.x, size.y);
  render_mask_rgba(&mut surface, params, Vec2::ZERO);
  Ok(surface)
}

/// Builds an image holding one tile of `params`.
///
/// The format is linear `Rgba8Unorm`: texels are multipliers, not colors, and
/// must reach the shader without an sRGB decode.
pub fn mask_image(params: &MaskParams) -> Result<Image, TileTooLarge> {
  let tile = render_tile(params)?;
  let size = Extent3d {
    width: tile.width(),
    height: tile.height(),
    depth_or_array_layers: 1,
  };

  let mut image = Image::new_fill(
    size,
    TextureDimension::D2,
    &[255, 255, 255, 255],
    TextureFormat::Rgba8Unorm,
    RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
  );

  image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
    address_mode_u: ImageAddressMode::Repeat,
    address_mode_v: ImageAddressMode::Repeat,
    ..ImageSamplerDescriptor::nearest()
  });

  upload_surface(&tile, &mut image);
  Ok(image)
}

/// Adds a mask tile image to `images`.
pub fn create_mask_texture(
  images: &mut Assets<Image>,
  params: &MaskParams,
) -> Result<Handle<Image>, TileTooLarge> {
  Ok(images.add(mask_image(params)?))
}

/// Uploads surface pixel data to an existing texture.
///
/// Returns `false` and leaves the image untouched if the sizes differ.
pub fn upload_surface(surface: &RgbaSurface, image: &mut Image) -> bool {
  let bytes = surface.as_bytes();
  match image.data {
    Some(ref mut data) if data.len() == bytes.len() => {
      data.copy_from_slice(bytes);
      true
    }
    _ => false,
  }
}
