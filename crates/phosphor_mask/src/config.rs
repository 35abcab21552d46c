//! TOML-backed mask configuration.
//!
//! ```toml
//! pattern = 1
//! dark = 0.25
//! stagger = 0
//! strength = 0.3
//!
//! [slot]
//! height = 3
//! ```
//!
//! Every field is optional and falls back to [`MaskConfig::default`].

use std::io;
use std::path::Path;

use bevy::prelude::Resource;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::mask::MaskParams;
use crate::pattern::MaskPattern;
use crate::slot::SlotOverlay;
use crate::stagger::Stagger;

/// Mask settings as written by users.
///
/// `pattern` is kept as the raw index so files written for other tools load
/// unchanged; it is clamped when converted with [`MaskConfig::to_params`].
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
  /// Topology index: 0 = magenta/green, 1 = slot/pentile, 2 = RYCB.
  pub pattern: i32,
  /// Weight of unlit phosphors.
  pub dark: f32,
  /// Row band height for staggering; 0 disables, the sign picks the formula.
  pub stagger: i32,
  /// How strongly the mask is blended over the image, in `[0, 1]`.
  pub strength: f32,
  /// Optional slot gaps.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub slot: Option<SlotOverlay>,
}

impl Default for MaskConfig {
  fn default() -> Self {
    let params = MaskParams::default();
    Self {
      pattern: params.pattern.index(),
      dark: params.dark,
      stagger: params.stagger.0,
      strength: params.strength,
      slot: params.slot,
    }
  }
}

impl MaskConfig {
  /// Parses and validates a TOML document.
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  /// Reads, parses and validates a TOML file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let config = Self::from_toml_str(&source)?;
    info!(
      "Loaded mask config from {} (pattern {}, stagger {})",
      path.display(),
      config.pattern,
      config.stagger
    );
    Ok(config)
  }

  /// Serializes to pretty TOML.
  pub fn to_toml_string(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(self)?)
  }

  /// Rejects values that cannot produce a usable mask.
  ///
  /// `dark` only has to be finite; values outside `[0, 1]` are allowed but
  /// logged. `stagger` and `slot.height` must keep the repeat tile within
  /// [`MAX_TILE_SIZE`](crate::mask::MAX_TILE_SIZE) on both axes.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !self.dark.is_finite() {
      return Err(ConfigError::Invalid {
        field: "dark",
        reason: format!("must be finite, got {}", self.dark),
      });
    }
    if !self.strength.is_finite() || !(0.0..=1.0).contains(&self.strength) {
      return Err(ConfigError::Invalid {
        field: "strength",
        reason: format!("must be within [0, 1], got {}", self.strength),
      });
    }
    let params = self.params();
    if let Err(err) = params.checked_tile_size() {
      let unslotted = MaskParams { slot: None, ..params };
      let field = if unslotted.checked_tile_size().is_err() {
        "stagger"
      } else {
        "slot.height"
      };
      return Err(ConfigError::Invalid {
        field,
        reason: err.to_string(),
      });
    }
    if !(0.0..=1.0).contains(&self.dark) {
      warn!("Mask dark level {} is outside [0, 1]", self.dark);
    }
    Ok(())
  }

  /// Converts to evaluation parameters, clamping the pattern index.
  pub fn to_params(&self) -> MaskParams {
    let params = self.params();
    if params.pattern.index() != self.pattern {
      warn!(
        "Mask pattern {} out of range, using {}",
        self.pattern,
        params.pattern.index()
      );
    }
    params
  }

  fn params(&self) -> MaskParams {
    MaskParams {
      pattern: MaskPattern::from_index(self.pattern),
      dark: self.dark,
      stagger: Stagger(self.stagger),
      slot: self.slot,
      strength: self.strength,
    }
  }
}

impl From<&MaskParams> for MaskConfig {
  fn from(params: &MaskParams) -> Self {
    Self {
      pattern: params.pattern.index(),
      dark: params.dark,
      stagger: params.stagger.0,
      strength: params.strength,
      slot: params.slot,
    }
  }
}

/// Error loading or saving a mask config.
#[derive(Debug)]
pub enum ConfigError {
  Io(io::Error),
  Parse(toml::de::Error),
  Serialize(toml::ser::Error),
  Invalid { field: &'static str, reason: String },
}

impl From<io::Error> for ConfigError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(err: toml::de::Error) -> Self {
    Self::Parse(err)
  }
}

impl From<toml::ser::Error> for ConfigError {
  fn from(err: toml::ser::Error) -> Self {
    Self::Serialize(err)
  }
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {}", e),
      Self::Parse(e) => write!(f, "parse error: {}", e),
      Self::Serialize(e) => write!(f, "serialize error: {}", e),
      Self::Invalid { field, reason } => write!(f, "invalid `{}`: {}", field, reason),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Parse(e) => Some(e),
      Self::Serialize(e) => Some(e),
      Self::Invalid { .. } => None,
    }
  }
}
