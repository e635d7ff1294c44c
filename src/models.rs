//! Option records exchanged between the host, the normalizer and the build engine.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{decode_attributes, decode_json_string};
use crate::error::OptionsError;

/// Per-chunk data handed to a dynamic filename function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
  /// Identifier of the chunk being emitted.
  pub chunk_id: Option<String>,
  /// Name of the chunk, when it has one.
  pub chunk_name: Option<String>,
  /// Content hash of the extracted stylesheet.
  pub content_hash: Option<String>,
}

/// Callable computing an output filename for a chunk.
pub type FilenameFn = Arc<dyn Fn(&PathData) -> String + Send + Sync>;

/// Output filename, either a placeholder template or a function evaluated per chunk.
#[derive(Clone)]
pub enum Filename {
  /// Template string such as `css/[name].[contenthash].css`.
  Template(String),
  /// Function computing the filename from chunk data.
  Dynamic(FilenameFn),
}

impl Filename {
  /// Wrap a closure as a dynamic filename.
  pub fn dynamic<F>(f: F) -> Self
  where
    F: Fn(&PathData) -> String + Send + Sync + 'static,
  {
    Self::Dynamic(Arc::new(f))
  }

  /// Template text, or `None` for dynamic filenames.
  pub fn as_template(&self) -> Option<&str> {
    match self {
      Self::Template(template) => Some(template.as_str()),
      Self::Dynamic(_) => None,
    }
  }

  /// Produce the filename for a chunk.
  ///
  /// Templates are returned untouched because placeholder substitution belongs to the
  /// engine; dynamic filenames are evaluated against `data`.
  pub fn evaluate(&self, data: &PathData) -> String {
    match self {
      Self::Template(template) => template.clone(),
      Self::Dynamic(f) => f(data),
    }
  }
}

impl fmt::Debug for Filename {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
      Self::Dynamic(_) => f.write_str("Dynamic(<function>)"),
    }
  }
}

impl PartialEq for Filename {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Template(a), Self::Template(b)) => a == b,
      (Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
      _ => false,
    }
  }
}

impl From<&str> for Filename {
  fn from(template: &str) -> Self {
    Self::Template(template.to_string())
  }
}

impl From<String> for Filename {
  fn from(template: String) -> Self {
    Self::Template(template)
  }
}

impl Serialize for Filename {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Template(template) => serializer.serialize_str(template),
      Self::Dynamic(_) => Err(serde::ser::Error::custom(
        "dynamic filenames cannot be serialized",
      )),
    }
  }
}

impl<'de> Deserialize<'de> for Filename {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    String::deserialize(deserializer).map(Self::Template)
  }
}

/// How the runtime inserts generated `<link>` tags into the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "InsertRepr")]
pub enum InsertOption {
  /// CSS selector of the element the tag is inserted after.
  Selector(String),
  /// Source text of a function receiving the link tag; embedded verbatim by the engine.
  Function(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InsertRepr {
  Selector(String),
  Function { function: String },
}

impl From<InsertRepr> for InsertOption {
  fn from(repr: InsertRepr) -> Self {
    match repr {
      InsertRepr::Selector(selector) => Self::Selector(selector),
      InsertRepr::Function { function } => Self::Function(function),
    }
  }
}

/// `type` attribute emitted on generated `<link>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Option<LinkTypeRepr>")]
pub enum LinkType {
  /// Not configured; the engine emits `text/css`.
  #[default]
  Default,
  /// Explicitly disabled; no `type` attribute is emitted.
  Omit,
  /// Custom attribute value.
  Custom(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinkTypeRepr {
  Flag(bool),
  Value(String),
}

impl TryFrom<Option<LinkTypeRepr>> for LinkType {
  type Error = String;

  fn try_from(repr: Option<LinkTypeRepr>) -> Result<Self, Self::Error> {
    match repr {
      None => Ok(Self::Default),
      Some(LinkTypeRepr::Flag(false)) => Ok(Self::Omit),
      Some(LinkTypeRepr::Flag(true)) => Err("`linkType` accepts a string or `false`".to_string()),
      Some(LinkTypeRepr::Value(value)) => Ok(Self::Custom(value)),
    }
  }
}

/// Partially specified options supplied by the user when constructing the plugin.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CssExtractPluginOptions {
  /// Filename template (or function) for extracted stylesheets of initial chunks.
  pub filename: Option<Filename>,
  /// Filename template for stylesheets of non-initial chunks.
  pub chunk_filename: Option<String>,
  /// Silence warnings about conflicting import order.
  pub ignore_order: Option<bool>,
  /// Where the runtime inserts `<link>` tags.
  pub insert: Option<InsertOption>,
  /// Extra attributes added to generated `<link>` tags.
  pub attributes: Option<BTreeMap<String, String>>,
  /// `type` attribute of generated `<link>` tags.
  pub link_type: LinkType,
  /// Inject the runtime that loads stylesheets of async chunks.
  pub runtime: Option<bool>,
  /// Emit path comments into extracted stylesheets.
  pub pathinfo: Option<bool>,
  /// Prefix relative `url()` references with `./`.
  pub enforce_relative: Option<bool>,
}

impl CssExtractPluginOptions {
  /// Set the filename template or function.
  pub fn with_filename(mut self, filename: impl Into<Filename>) -> Self {
    self.filename = Some(filename.into());
    self
  }

  /// Set an explicit chunk filename.
  pub fn with_chunk_filename(mut self, chunk_filename: impl Into<String>) -> Self {
    self.chunk_filename = Some(chunk_filename.into());
    self
  }

  /// Set the link insertion behaviour.
  pub fn with_insert(mut self, insert: InsertOption) -> Self {
    self.insert = Some(insert);
    self
  }

  /// Set the link type.
  pub fn with_link_type(mut self, link_type: LinkType) -> Self {
    self.link_type = link_type;
    self
  }

  /// Add a single `<link>` attribute.
  pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self
      .attributes
      .get_or_insert_with(BTreeMap::new)
      .insert(key.into(), value.into());
    self
  }
}

/// Split chunk settings relevant to stylesheet extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitChunksSettings {
  /// Ordered module types counted towards split chunk size budgets.
  pub default_size_types: Vec<String>,
}

/// Host-owned build settings read (and adjusted) while the plugin is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmbientBuildSettings {
  /// Code-splitting configuration; `None` when splitting is disabled.
  pub split_chunks: Option<SplitChunksSettings>,
  /// Host-wide `output.pathinfo` debug flag.
  pub output_pathinfo: bool,
}

/// Normalized `insert` behaviour as handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InsertRecord {
  /// No custom insertion; the field is left out of the serialized record.
  #[default]
  NoOp,
  /// JSON-encoded selector string.
  Literal(String),
  /// Function source text embedded verbatim.
  SourceText(String),
}

impl InsertRecord {
  /// Returns `true` for the no-op variant.
  pub fn is_noop(&self) -> bool {
    matches!(self, Self::NoOp)
  }

  /// Wire value sent to the engine.
  pub fn as_wire(&self) -> Option<&str> {
    match self {
      Self::NoOp => None,
      Self::Literal(value) | Self::SourceText(value) => Some(value.as_str()),
    }
  }
}

impl Serialize for InsertRecord {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self.as_wire() {
      Some(value) => serializer.serialize_str(value),
      None => serializer.serialize_none(),
    }
  }
}

/// Fully specified option record consumed by the build engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOptionRecord {
  /// Filename template or function for initial chunks.
  pub filename: Filename,
  /// Filename template for non-initial chunks.
  pub chunk_filename: String,
  /// Whether import order conflicts are ignored.
  pub ignore_order: bool,
  /// Whether the loading runtime is injected.
  pub runtime: bool,
  /// Link insertion behaviour.
  #[serde(skip_serializing_if = "InsertRecord::is_noop")]
  pub insert: InsertRecord,
  /// JSON-encoded link type; absent when no `type` attribute should be emitted.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link_type: Option<String>,
  /// JSON-encoded attribute names mapped to JSON-encoded values.
  pub attributes: BTreeMap<String, String>,
  /// Whether path comments are emitted.
  pub pathinfo: bool,
  /// Whether relative `url()` references get a `./` prefix.
  pub enforce_relative: bool,
}

impl NormalizedOptionRecord {
  /// Convert the record back into user options, decoding every JSON-encoded field.
  ///
  /// Normalizing the result yields a record equal to `self`.
  pub fn to_raw_options(&self) -> Result<CssExtractPluginOptions, OptionsError> {
    let insert = match &self.insert {
      InsertRecord::NoOp => None,
      InsertRecord::Literal(encoded) => Some(InsertOption::Selector(decode_json_string(
        "insert", encoded,
      )?)),
      InsertRecord::SourceText(source) => Some(InsertOption::Function(source.clone())),
    };

    let link_type = match &self.link_type {
      Some(encoded) => LinkType::Custom(decode_json_string("linkType", encoded)?),
      None => LinkType::Omit,
    };

    Ok(CssExtractPluginOptions {
      filename: Some(self.filename.clone()),
      chunk_filename: Some(self.chunk_filename.clone()),
      ignore_order: Some(self.ignore_order),
      insert,
      attributes: Some(decode_attributes(&self.attributes)?),
      link_type,
      runtime: Some(self.runtime),
      pathinfo: Some(self.pathinfo),
      enforce_relative: Some(self.enforce_relative),
    })
  }

  /// Serialize the record as compact JSON.
  pub fn to_json(&self) -> Result<String, OptionsError> {
    serde_json::to_string(self).map_err(OptionsError::Serialize)
  }
}
