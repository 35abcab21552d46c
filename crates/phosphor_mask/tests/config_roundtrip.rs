use std::io::Write;

use phosphor_mask::{ConfigError, MaskConfig, MaskParams, MaskPattern, SlotOverlay, Stagger};

#[test]
fn config_roundtrip_via_toml() {
  let config = MaskConfig {
    pattern: 1,
    dark: 0.15,
    stagger: -2,
    strength: 0.6,
    slot: Some(SlotOverlay::new(3)),
  };
  let toml_str = config.to_toml_string().unwrap();
  let deserialized = MaskConfig::from_toml_str(&toml_str).unwrap();
  assert_eq!(deserialized, config);
}

#[test]
fn load_from_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  writeln!(
    file,
    "pattern = 2\ndark = 0.1\nstagger = 3\nstrength = 1.0\n\n[slot]\nheight = 2"
  )
  .unwrap();

  let config = MaskConfig::load(file.path()).unwrap();
  let params = config.to_params();

  assert_eq!(params.pattern, MaskPattern::Rycb);
  assert_eq!(params.dark, 0.1);
  assert_eq!(params.stagger, Stagger(3));
  assert_eq!(params.strength, 1.0);
  assert_eq!(params.slot, Some(SlotOverlay::new(2)));
}

#[test]
fn missing_file_is_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let err = MaskConfig::load(dir.path().join("missing.toml")).unwrap_err();
  assert!(matches!(err, ConfigError::Io(_)));
  assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn malformed_file_is_parse_error() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  writeln!(file, "pattern = [").unwrap();
  let err = MaskConfig::load(file.path()).unwrap_err();
  assert!(matches!(err, ConfigError::Parse(_)));
  assert!(err.to_string().starts_with("parse error"));
}

#[test]
fn params_to_config_and_back() {
  let params = MaskParams::new(MaskPattern::SlotPentile, 0.3)
    .with_stagger(1)
    .with_strength(0.8);
  let config = MaskConfig::from(&params);
  assert_eq!(config.to_params(), params);
}

#[test]
fn partial_document_keeps_defaults() {
  let config = MaskConfig::from_toml_str("stagger = 2").unwrap();
  let defaults = MaskConfig::default();
  assert_eq!(config.stagger, 2);
  assert_eq!(config.pattern, defaults.pattern);
  assert_eq!(config.dark, defaults.dark);
  assert_eq!(config.strength, defaults.strength);
  assert_eq!(config.slot, None);
}
