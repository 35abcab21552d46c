//! Bevy plugin keeping a mask texture in sync with [`MaskConfig`].

use bevy::prelude::*;
use log::{debug, warn};

use crate::config::MaskConfig;
use crate::mask::MaskParams;
use crate::render::{create_mask_texture, mask_image};

/// Maintains [`MaskTexture`] from the [`MaskConfig`] resource.
///
/// Inserts a default [`MaskConfig`] unless one already exists. The texture is
/// rebuilt whenever the config changes; when the tile size is unchanged the
/// existing image asset is overwritten so materials holding the handle see the
/// new mask. A config that fails [`MaskConfig::validate`] is logged and the
/// previous texture stays in place.
///
/// Requires `Assets<Image>` (normally from `ImagePlugin`).
///
/// ```ignore
/// use phosphor_mask::{MaskConfig, PhosphorMaskPlugin};
///
/// app
///   .insert_resource(MaskConfig { pattern: 2, ..default() })
///   .add_plugins(PhosphorMaskPlugin);
/// ```
pub struct PhosphorMaskPlugin;

impl Plugin for PhosphorMaskPlugin {
  fn build(&self, app: &mut App) {
    app.init_resource::<MaskConfig>();
    app.init_resource::<MaskTexture>();
    app.add_systems(Update, rebuild_mask_texture);
  }
}

/// The current mask tile texture.
#[derive(Resource, Default)]
pub struct MaskTexture {
  /// Tile image; sample with a repeating sampler at `pixel / tile_size`.
  pub image: Handle<Image>,
  /// Tile size in pixels.
  pub tile_size: UVec2,
  /// Params the image was built from, `None` before the first build.
  pub params: Option<MaskParams>,
}

fn rebuild_mask_texture(
  config: Res<MaskConfig>,
  mut texture: ResMut<MaskTexture>,
  mut images: ResMut<Assets<Image>>,
) {
  if !config.is_changed() {
    return;
  }

  if let Err(err) = config.validate() {
    warn!("Keeping previous mask texture: {}", err);
    return;
  }

  let params = config.to_params();
  if texture.params == Some(params) {
    return;
  }

  let tile_size = params.tile_size();
  let rebuilt = if texture.params.is_some()
    && texture.tile_size == tile_size
    && let Some(existing) = images.get_mut(&texture.image)
  {
    mask_image(&params).map(|image| *existing = image)
  } else {
    create_mask_texture(&mut images, &params).map(|handle| texture.image = handle)
  };
  if let Err(err) = rebuilt {
    warn!("Keeping previous mask texture: {}", err);
    return;
  }

  debug!(
    "Rebuilt mask texture: {:?}, {}x{} tile",
    params.pattern, tile_size.x, tile_size.y
  );
  texture.tile_size = tile_size;
  texture.params = Some(params);
}
