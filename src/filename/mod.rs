//! Filename template inspection and chunk filename derivation.
//!
//! Placeholder matching lives apart from the derivation so the set of tokens that make a
//! template chunk-unique can be audited and extended on its own.

mod chunk;
mod placeholders;

pub use chunk::derive_chunk_filename;
pub use placeholders::{
    UniquenessPlaceholder, find_uniqueness_placeholders, has_uniqueness_placeholder,
};
