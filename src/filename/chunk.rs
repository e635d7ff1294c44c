use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::placeholders::find_uniqueness_placeholders;
use crate::constants::DEFAULT_CHUNK_FILENAME;
use crate::models::Filename;

/// Matches the basename of the first path segment that runs to the end of the template
/// or to a `?` query suffix.
fn basename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(^|/)([^/]*(?:\?|$))").expect("invalid basename regex"))
}

/// Derive the filename template used for stylesheets of non-initial chunks.
///
/// A non-empty `explicit` chunk filename always wins. Templates that already contain a
/// uniqueness placeholder are reused as-is; chunk-invariant templates get `[id].` in
/// front of their basename so that every chunk lands on its own path. Dynamic filenames
/// cannot be inspected and fall back to `[id].css`.
pub fn derive_chunk_filename(filename: &Filename, explicit: Option<&str>) -> String {
    if let Some(explicit) = explicit.filter(|value| !value.is_empty()) {
        debug!("using explicit chunk filename {explicit:?}");
        return explicit.to_string();
    }

    match filename {
        Filename::Template(template) => derive_from_template(template),
        Filename::Dynamic(_) => {
            debug!("filename is dynamic; chunk filename falls back to {DEFAULT_CHUNK_FILENAME:?}");
            DEFAULT_CHUNK_FILENAME.to_string()
        }
    }
}

fn derive_from_template(template: &str) -> String {
    let placeholders = find_uniqueness_placeholders(template);
    if !placeholders.is_empty() {
        debug!("filename {template:?} varies per chunk via {placeholders:?}; reusing it");
        return template.to_string();
    }

    let derived = prefix_basename_with_id(template);
    debug!("filename {template:?} is chunk-invariant; chunk filename is {derived:?}");
    derived
}

fn prefix_basename_with_id(template: &str) -> String {
    basename_pattern()
        .replace(template, "${1}[id].${2}")
        .into_owned()
}
