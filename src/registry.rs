//! Canonical name registry loading.
//!
//! The registry document is a JSON array of `[id, name]` pairs, possibly
//! prefixed with a UTF-8 byte-order marker. Only the names are kept; ids may
//! be any JSON value and are ignored.

use crate::core::errors::{Error, Result};
use crate::io;
use serde_json::Value;
use std::path::Path;

const EXPECTED_SHAPE: &str = "expected format: [ [id, name], ... ]";

/// Load the ordered list of canonical names from a JSON document.
///
/// Invalid JSON yields `Error::Parse`; a structurally valid document of the
/// wrong shape (including a malformed entry anywhere in the list) yields
/// `Error::Format`. Names are trimmed.
pub fn load_canonical_names(path: &Path) -> Result<Vec<String>> {
    let raw = io::read_file(path)?;
    parse_canonical_names(&raw, path)
}

fn parse_canonical_names(raw: &str, path: &Path) -> Result<Vec<String>> {
    let content = strip_bom(raw);
    let data: Value =
        serde_json::from_str(content).map_err(|e| Error::parse(path, e.to_string()))?;

    let entries = data
        .as_array()
        .filter(|entries| !entries.is_empty())
        .ok_or_else(|| Error::format(path, EXPECTED_SHAPE))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| extract_name(entry).ok_or_else(|| bad_entry(path, index)))
        .collect()
}

/// Pull the trimmed name out of one `[id, name]` entry.
fn extract_name(entry: &Value) -> Option<String> {
    let pair = entry.as_array().filter(|pair| pair.len() >= 2)?;
    let name = pair[1].as_str()?;
    Some(name.trim().to_string())
}

fn bad_entry(path: &Path, index: usize) -> Error {
    Error::format(path, format!("entry {index}: {EXPECTED_SHAPE}"))
}

/// Strip a leading byte-order marker if present.
fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix('\u{feff}').unwrap_or(raw)
}
