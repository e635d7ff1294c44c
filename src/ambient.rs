//! Adjustments the plugin makes to host-owned build settings before normalization.

use log::debug;

use crate::constants::{MODULE_TYPE, SIZE_TYPE_WILDCARD};
use crate::models::{AmbientBuildSettings, CssExtractPluginOptions};

/// Count extracted stylesheets towards split chunk size budgets.
///
/// The module type is only registered when splitting is enabled and its size types
/// include the `"..."` wildcard. Registration is idempotent. Returns `true` when the size
/// types changed.
pub fn register_size_category(settings: &mut AmbientBuildSettings) -> bool {
  let Some(split_chunks) = settings.split_chunks.as_mut() else {
    debug!("split chunks disabled; not registering {MODULE_TYPE}");
    return false;
  };

  let size_types = &mut split_chunks.default_size_types;
  if !size_types.iter().any(|kind| kind == SIZE_TYPE_WILDCARD) {
    debug!("size types {size_types:?} have no wildcard; not registering {MODULE_TYPE}");
    return false;
  }

  if size_types.iter().any(|kind| kind == MODULE_TYPE) {
    debug!("{MODULE_TYPE} already registered as a size type");
    return false;
  }

  size_types.push(MODULE_TYPE.to_string());
  debug!("registered {MODULE_TYPE} as a split chunk size type");
  true
}

/// Default `pathinfo` to `true` when the host enables it globally and the user left it unset.
///
/// Returns `true` when the options changed.
pub fn derive_pathinfo(
  options: &mut CssExtractPluginOptions,
  settings: &AmbientBuildSettings,
) -> bool {
  if settings.output_pathinfo && options.pathinfo.is_none() {
    debug!("output.pathinfo is enabled; defaulting pathinfo to true");
    options.pathinfo = Some(true);
    return true;
  }

  false
}
