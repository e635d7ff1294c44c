//! Identifiers shared between the option normalizer, the extraction loader and the engine.

/// Name the plugin reports to the host build tool.
pub const PLUGIN_NAME: &str = "css-extract-rspack-plugin";

/// Built-in plugin identifier passed to the engine on registration.
pub const BUILTIN_PLUGIN_NAME: &str = "CssExtractRspackPlugin";

/// Module type tagged onto extracted style modules by the loader.
pub const MODULE_TYPE: &str = "css/mini-extract";

/// Filename template used when the user does not configure one.
pub const DEFAULT_FILENAME: &str = "[name].css";

/// Chunk filename used when `filename` is computed dynamically.
pub const DEFAULT_CHUNK_FILENAME: &str = "[id].css";

/// Link type emitted on generated `<link>` tags unless overridden.
pub const DEFAULT_LINK_TYPE: &str = "text/css";

/// Size-type sentinel meaning "every other module type" in split chunk settings.
pub const SIZE_TYPE_WILDCARD: &str = "...";
