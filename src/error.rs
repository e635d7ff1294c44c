//! Error type shared by configuration loading and record conversion.

use std::path::PathBuf;

/// Errors raised while loading plugin configuration or converting option records.
#[derive(Debug)]
pub enum OptionsError {
  /// Failed to read a configuration file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON configuration file.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// A JSON-encoded record field could not be decoded back into a string.
  Decode {
    /// Record field holding the malformed value.
    field: &'static str,
    /// Source decode error.
    source: serde_json::Error,
  },
  /// The normalized record could not be serialized for the engine.
  Serialize(serde_json::Error),
}

impl std::fmt::Display for OptionsError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::Decode { field, source } => {
        write!(f, "failed to decode `{}`: {}", field, source)
      }
      Self::Serialize(source) => write!(f, "failed to serialize option record: {}", source),
    }
  }
}

impl std::error::Error for OptionsError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
      Self::Decode { source, .. } => Some(source),
      Self::Serialize(source) => Some(source),
    }
  }
}
