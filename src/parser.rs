//! Filename parsing: splits a filename into the candidate name and the
//! suffix that must be preserved verbatim through a rename.

use crate::core::ParsedName;

/// Delimiter separating the name portion of a filename from the rest.
const NAME_DELIMITER: char = '_';

/// Split a filename at the first `_` into `(candidate, suffix)`.
///
/// The candidate is trimmed of surrounding whitespace; the suffix keeps the
/// delimiter and everything after it, byte-for-byte. A filename with no
/// delimiter is all candidate and has an empty suffix.
pub fn parse_filename(filename: &str) -> ParsedName {
    match filename.find(NAME_DELIMITER) {
        Some(idx) => ParsedName {
            candidate: filename[..idx].trim().to_string(),
            suffix: filename[idx..].to_string(),
        },
        None => ParsedName {
            candidate: filename.trim().to_string(),
            suffix: String::new(),
        },
    }
}
