//! JSON string encoding used for record fields the engine re-embeds as code.

use std::collections::BTreeMap;

use crate::error::OptionsError;

/// Encode a string as a JSON string literal, quotes included.
pub fn encode_json_string(value: &str) -> String {
  serde_json::Value::from(value).to_string()
}

/// Decode a JSON string literal produced by [`encode_json_string`].
pub fn decode_json_string(field: &'static str, encoded: &str) -> Result<String, OptionsError> {
  serde_json::from_str(encoded).map_err(|source| OptionsError::Decode { field, source })
}

/// Encode every attribute name and value.
pub fn encode_attributes(attributes: &BTreeMap<String, String>) -> BTreeMap<String, String> {
  attributes
    .iter()
    .map(|(key, value)| (encode_json_string(key), encode_json_string(value)))
    .collect()
}

/// Reverse of [`encode_attributes`].
pub fn decode_attributes(
  encoded: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, OptionsError> {
  encoded
    .iter()
    .map(|(key, value)| -> Result<(String, String), OptionsError> {
      Ok((
        decode_json_string("attributes", key)?,
        decode_json_string("attributes", value)?,
      ))
    })
    .collect()
}
