//! Plugin configuration loader pairing user options with the host's build settings.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::OptionsError;
use crate::models::{AmbientBuildSettings, CssExtractPluginOptions};
use crate::plugin::CssExtractPlugin;

/// Configuration file searched for by [`PluginConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "css-extract.config.json";

/// Plugin options and host build settings read from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
  /// User options passed to the plugin constructor.
  pub options: CssExtractPluginOptions,
  /// Host build settings the plugin reads and adjusts.
  pub build: AmbientBuildSettings,
}

impl PluginConfig {
  /// Load the default configuration file from `dir`.
  ///
  /// A missing file yields the defaults; unreadable or malformed files are errors.
  pub fn discover(dir: &Path) -> Result<Self, OptionsError> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    match fs::read_to_string(&path) {
      Ok(contents) => Self::parse(&path, &contents),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
      Err(err) => Err(OptionsError::Io { path, source: err }),
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| OptionsError::Io {
      path: path.to_path_buf(),
      source: err,
    })?;
    Self::parse(path, &contents)
  }

  fn parse(path: &Path, contents: &str) -> Result<Self, OptionsError> {
    serde_json::from_str(contents).map_err(|err| OptionsError::Parse {
      path: path.to_path_buf(),
      source: err,
    })
  }

  /// Split into a plugin ready to apply and the build settings it applies to.
  pub fn into_parts(self) -> (CssExtractPlugin, AmbientBuildSettings) {
    (CssExtractPlugin::new(self.options), self.build)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Filename, LinkType};
  use tempfile::tempdir;

  #[test]
  fn discover_returns_defaults_for_missing_file() {
    let temp = tempdir().expect("failed to create temp dir");

    let config = PluginConfig::discover(temp.path()).expect("missing files should not error");

    assert_eq!(config.options, CssExtractPluginOptions::default());
    assert_eq!(config.build, AmbientBuildSettings::default());
  }

  #[test]
  fn discover_reads_options_and_build_settings() {
    let temp = tempdir().expect("failed to create temp dir");
    std::fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{
        "options": {"filename": "styles/app.css", "linkType": false},
        "build": {"splitChunks": {"defaultSizeTypes": ["..."]}, "outputPathinfo": true}
      }"#,
    )
    .expect("failed to write config");

    let config = PluginConfig::discover(temp.path()).expect("config should load");

    assert_eq!(config.options.filename, Some(Filename::from("styles/app.css")));
    assert_eq!(config.options.link_type, LinkType::Omit);
    assert!(config.build.output_pathinfo);
    assert_eq!(
      config.build.split_chunks.unwrap().default_size_types,
      vec!["..."]
    );
  }

  #[test]
  fn malformed_files_are_reported() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&path, r#"{"options": {"filename": 1}}"#).expect("failed to write config");

    let err = PluginConfig::discover(temp.path()).unwrap_err();
    assert!(matches!(err, OptionsError::Parse { .. }));
    assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
  }

  #[test]
  fn load_from_path_requires_the_file() {
    let temp = tempdir().expect("failed to create temp dir");

    let err = PluginConfig::load_from_path(temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, OptionsError::Io { .. }));
  }

  #[test]
  fn into_parts_builds_the_plugin() {
    let config: PluginConfig =
      serde_json::from_str(r#"{"options": {"runtime": false}}"#).expect("config should parse");

    let (plugin, build) = config.into_parts();
    assert_eq!(plugin.options().runtime, Some(false));
    assert!(build.split_chunks.is_none());
  }
}
