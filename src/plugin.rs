//! Plugin application: ambient adjustments, normalization and engine registration.

use std::convert::Infallible;

use log::debug;

use crate::ambient::{derive_pathinfo, register_size_category};
use crate::constants::{BUILTIN_PLUGIN_NAME, PLUGIN_NAME};
use crate::models::{AmbientBuildSettings, CssExtractPluginOptions, NormalizedOptionRecord};
use crate::normalizer::normalize_options;

/// Build engine receiving built-in plugin registrations.
pub trait BuildEngine {
  /// Error returned when the engine rejects a registration.
  type Error;

  /// Register a built-in plugin together with its normalized options.
  fn register_builtin_plugin(
    &mut self,
    name: &'static str,
    options: NormalizedOptionRecord,
  ) -> Result<(), Self::Error>;
}

/// In-memory engine that keeps every registration it receives.
#[derive(Debug, Default)]
pub struct RecordingEngine {
  registrations: Vec<(&'static str, NormalizedOptionRecord)>,
}

impl RecordingEngine {
  /// Create an engine with no registrations.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registrations in the order they were received.
  pub fn registrations(&self) -> &[(&'static str, NormalizedOptionRecord)] {
    &self.registrations
  }

  /// Options of the most recent registration.
  pub fn last_options(&self) -> Option<&NormalizedOptionRecord> {
    self.registrations.last().map(|(_, options)| options)
  }
}

impl BuildEngine for RecordingEngine {
  type Error = Infallible;

  fn register_builtin_plugin(
    &mut self,
    name: &'static str,
    options: NormalizedOptionRecord,
  ) -> Result<(), Self::Error> {
    self.registrations.push((name, options));
    Ok(())
  }
}

/// Stylesheet extraction plugin holding the user's options until it is applied.
#[derive(Debug, Clone, Default)]
pub struct CssExtractPlugin {
  options: CssExtractPluginOptions,
}

impl CssExtractPlugin {
  /// Name the plugin reports to the host.
  pub const PLUGIN_NAME: &'static str = PLUGIN_NAME;

  /// Create a plugin for the provided options.
  pub fn new(options: CssExtractPluginOptions) -> Self {
    Self { options }
  }

  /// Current options, including adjustments made by [`CssExtractPlugin::apply`].
  pub fn options(&self) -> &CssExtractPluginOptions {
    &self.options
  }

  /// Apply the plugin to a build.
  ///
  /// Registers the extracted module type as a split chunk size type, defaults
  /// `pathinfo` from the host settings, then hands the normalized record to `engine`
  /// exactly once.
  pub fn apply<E: BuildEngine>(
    &mut self,
    settings: &mut AmbientBuildSettings,
    engine: &mut E,
  ) -> Result<(), E::Error> {
    register_size_category(settings);
    derive_pathinfo(&mut self.options, settings);

    let record = normalize_options(&self.options);
    debug!(
      "registering {} with filename {:?} and chunk filename {:?}",
      BUILTIN_PLUGIN_NAME, record.filename, record.chunk_filename
    );
    engine.register_builtin_plugin(BUILTIN_PLUGIN_NAME, record)
  }
}
