//! # MIME Type Descriptions
//!
//! Maps MIME type identifiers such as `text/plain` to the human-friendly
//! descriptions published in the freedesktop.org shared-mime-info database.
//!
//! The table lives in `data.rs`, which is produced by the `mimedesc-gen`
//! binary and compiled in as a perfect-hash map. It is never modified at run
//! time, so lookups are lock-free and safe from any number of threads.
//!
//! ## Modules
//! - `generator` - Extraction of the upstream XML and rendering of `data.rs`
//!   (behind the default `generator` feature)

mod data;

#[cfg(feature = "generator")]
pub mod generator;

use data::MIME_DESCRIPTIONS;

/// Get the description for a MIME type.
///
/// Matching is exact and case-sensitive; parameters such as `; charset=utf-8`
/// are not stripped.
pub fn get(mime_type: &str) -> Option<&'static str> {
    MIME_DESCRIPTIONS.get(mime_type).copied()
}

/// Get the description for a MIME type along with a found flag.
///
/// Returns `("", false)` when the type is unknown.
pub fn lookup(mime_type: &str) -> (&'static str, bool) {
    match get(mime_type) {
        Some(description) => (description, true),
        None => ("", false),
    }
}

/// Number of MIME types with a description.
pub fn len() -> usize {
    MIME_DESCRIPTIONS.len()
}

/// Whether the table has no entries.
pub fn is_empty() -> bool {
    MIME_DESCRIPTIONS.is_empty()
}

/// Iterate over every `(mime_type, description)` pair, in no particular order.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static str)> {
    MIME_DESCRIPTIONS.entries().map(|(k, v)| (*k, *v))
}
