//! Expansion of user options into the record the build engine consumes.

use std::collections::BTreeMap;

use log::trace;

use crate::constants::{DEFAULT_FILENAME, DEFAULT_LINK_TYPE};
use crate::encoding::{encode_attributes, encode_json_string};
use crate::filename::derive_chunk_filename;
use crate::models::{
  CssExtractPluginOptions, Filename, InsertOption, InsertRecord, LinkType, NormalizedOptionRecord,
};

/// Serialized form of every option besides the two filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiscOptionRecord {
  /// Defaults to `false`.
  pub ignore_order: bool,
  /// Defaults to `true`.
  pub runtime: bool,
  /// Encoded insert behaviour.
  pub insert: InsertRecord,
  /// Encoded link type, `None` when omitted.
  pub link_type: Option<String>,
  /// Encoded attributes.
  pub attributes: BTreeMap<String, String>,
  /// Defaults to `false`.
  pub pathinfo: bool,
  /// Defaults to `false`.
  pub enforce_relative: bool,
}

/// Filename in effect, falling back to `[name].css` when unset or empty.
pub fn resolve_filename(filename: Option<&Filename>) -> Filename {
  match filename {
    Some(Filename::Template(template)) if template.is_empty() => Filename::from(DEFAULT_FILENAME),
    Some(filename) => filename.clone(),
    None => Filename::from(DEFAULT_FILENAME),
  }
}

/// Apply defaults and engine encoding to the non-filename options.
pub fn serialize_misc_options(options: &CssExtractPluginOptions) -> MiscOptionRecord {
  MiscOptionRecord {
    ignore_order: options.ignore_order.unwrap_or(false),
    runtime: options.runtime.unwrap_or(true),
    insert: serialize_insert(options.insert.as_ref()),
    link_type: serialize_link_type(&options.link_type),
    attributes: options
      .attributes
      .as_ref()
      .map(encode_attributes)
      .unwrap_or_default(),
    pathinfo: options.pathinfo.unwrap_or(false),
    enforce_relative: options.enforce_relative.unwrap_or(false),
  }
}

fn serialize_insert(insert: Option<&InsertOption>) -> InsertRecord {
  match insert {
    None => InsertRecord::NoOp,
    Some(InsertOption::Selector(selector)) => InsertRecord::Literal(encode_json_string(selector)),
    Some(InsertOption::Function(source)) => InsertRecord::SourceText(source.clone()),
  }
}

fn serialize_link_type(link_type: &LinkType) -> Option<String> {
  match link_type {
    LinkType::Default => Some(encode_json_string(DEFAULT_LINK_TYPE)),
    LinkType::Omit => None,
    LinkType::Custom(value) => Some(encode_json_string(value)),
  }
}

/// Produce the fully specified record for the engine.
///
/// Ambient adjustments (see [`crate::ambient`]) must already have been applied to
/// `options`.
pub fn normalize_options(options: &CssExtractPluginOptions) -> NormalizedOptionRecord {
  let filename = resolve_filename(options.filename.as_ref());
  let chunk_filename = derive_chunk_filename(&filename, options.chunk_filename.as_deref());
  let MiscOptionRecord {
    ignore_order,
    runtime,
    insert,
    link_type,
    attributes,
    pathinfo,
    enforce_relative,
  } = serialize_misc_options(options);

  let record = NormalizedOptionRecord {
    filename,
    chunk_filename,
    ignore_order,
    runtime,
    insert,
    link_type,
    attributes,
    pathinfo,
    enforce_relative,
  };
  trace!("normalized css extract options: {record:?}");
  record
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::PathData;

  #[test]
  fn empty_options_expand_to_defaults() {
    let record = normalize_options(&CssExtractPluginOptions::default());

    assert_eq!(record.filename, Filename::from("[name].css"));
    assert_eq!(record.chunk_filename, "[name].css");
    assert!(!record.ignore_order);
    assert!(record.runtime);
    assert_eq!(record.insert, InsertRecord::NoOp);
    assert_eq!(record.link_type.as_deref(), Some(r#""text/css""#));
    assert!(record.attributes.is_empty());
    assert!(!record.pathinfo);
    assert!(!record.enforce_relative);
  }

  #[test]
  fn chunk_invariant_filename_gets_id_prefix() {
    let options = CssExtractPluginOptions::default().with_filename("bundle.css");
    let record = normalize_options(&options);

    assert_eq!(record.filename, Filename::from("bundle.css"));
    assert_eq!(record.chunk_filename, "[id].bundle.css");
  }

  #[test]
  fn empty_filename_falls_back_to_default() {
    let options = CssExtractPluginOptions::default().with_filename("");
    let record = normalize_options(&options);

    assert_eq!(record.filename, Filename::from("[name].css"));
    assert_eq!(record.chunk_filename, "[name].css");
  }

  #[test]
  fn dynamic_filename_is_passed_through() {
    let filename = Filename::dynamic(|_: &PathData| "dynamic.css".to_string());
    let options = CssExtractPluginOptions::default().with_filename(filename.clone());
    let record = normalize_options(&options);

    assert_eq!(record.filename, filename);
    assert_eq!(record.chunk_filename, "[id].css");
  }

  #[test]
  fn link_type_variants() {
    let omitted =
      serialize_misc_options(&CssExtractPluginOptions::default().with_link_type(LinkType::Omit));
    assert_eq!(omitted.link_type, None);

    let custom = serialize_misc_options(
      &CssExtractPluginOptions::default().with_link_type(LinkType::Custom("text/x-css".into())),
    );
    assert_eq!(custom.link_type.as_deref(), Some(r#""text/x-css""#));
  }

  #[test]
  fn insert_variants() {
    let selector = serialize_misc_options(
      &CssExtractPluginOptions::default().with_insert(InsertOption::Selector("#my-container".into())),
    );
    assert_eq!(selector.insert, InsertRecord::Literal(r##""#my-container""##.into()));

    let source = "function (linkTag) { document.head.prepend(linkTag) }";
    let function = serialize_misc_options(
      &CssExtractPluginOptions::default().with_insert(InsertOption::Function(source.into())),
    );
    assert_eq!(function.insert, InsertRecord::SourceText(source.into()));
  }

  #[test]
  fn attributes_are_encoded() {
    let misc = serialize_misc_options(
      &CssExtractPluginOptions::default()
        .with_attribute("id", "target")
        .with_attribute("data-target", "example"),
    );

    assert_eq!(misc.attributes.len(), 2);
    assert_eq!(misc.attributes[r#""id""#], r#""target""#);
    assert_eq!(misc.attributes[r#""data-target""#], r#""example""#);
  }

  #[test]
  fn explicit_booleans_are_kept() {
    let options = CssExtractPluginOptions {
      ignore_order: Some(true),
      runtime: Some(false),
      pathinfo: Some(true),
      enforce_relative: Some(true),
      ..CssExtractPluginOptions::default()
    };
    let misc = serialize_misc_options(&options);

    assert!(misc.ignore_order);
    assert!(!misc.runtime);
    assert!(misc.pathinfo);
    assert!(misc.enforce_relative);
  }

  #[test]
  fn renormalizing_a_record_is_stable() {
    let options = CssExtractPluginOptions::default()
      .with_filename("static/app.css")
      .with_insert(InsertOption::Selector("head".into()))
      .with_link_type(LinkType::Custom("text/x-css".into()))
      .with_attribute("data-\"quoted\"", "a\\b");
    let record = normalize_options(&options);

    let again = normalize_options(&record.to_raw_options().unwrap());
    assert_eq!(again, record);

    let omitted = normalize_options(&CssExtractPluginOptions::default().with_link_type(LinkType::Omit));
    let again = normalize_options(&omitted.to_raw_options().unwrap());
    assert_eq!(again, omitted);
  }

  #[test]
  fn serialized_record_uses_engine_field_names() {
    let record = normalize_options(&CssExtractPluginOptions::default().with_link_type(LinkType::Omit));
    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(
      value,
      serde_json::json!({
        "filename": "[name].css",
        "chunkFilename": "[name].css",
        "ignoreOrder": false,
        "runtime": true,
        "attributes": {},
        "pathinfo": false,
        "enforceRelative": false
      })
    );
  }
}
