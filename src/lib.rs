#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod ambient;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod filename;
pub mod models;
pub mod normalizer;
pub mod plugin;

pub use ambient::{derive_pathinfo, register_size_category};
pub use config::PluginConfig;
pub use error::OptionsError;
pub use filename::{UniquenessPlaceholder, derive_chunk_filename};
pub use models::{
  AmbientBuildSettings, CssExtractPluginOptions, Filename, InsertOption, InsertRecord, LinkType,
  NormalizedOptionRecord, PathData, SplitChunksSettings,
};
pub use normalizer::{normalize_options, serialize_misc_options};
pub use plugin::{BuildEngine, CssExtractPlugin, RecordingEngine};
