//! Rename decision logic: given a parsed filename and its best canonical
//! match, classify the entry and propose the corrected filename.

use crate::core::{NameMatch, ParsedName, Status};

/// Classification of a single directory entry, before any filesystem action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub corrected_filename: String,
    pub is_correct: bool,
    /// A rename is warranted: the candidate is misspelled and the corrected
    /// filename differs byte-for-byte from the original.
    pub needs_rename: bool,
    pub status: Status,
}

/// Classify an entry against its best match.
///
/// `status` reflects eligibility, not execution: `Renamed` means a rename is
/// warranted, whether or not rename mode is active. `NotMatched` covers the
/// residual case where the candidate mismatches case-insensitively but the
/// corrected filename is byte-identical to the original (a pure casing or
/// whitespace artifact that a rename cannot fix).
pub fn decide(original: &str, parsed: &ParsedName, best: &NameMatch) -> Decision {
    let is_correct = parsed.candidate.to_lowercase() == best.name.to_lowercase();
    let corrected_filename = format!("{}{}", best.name, parsed.suffix);
    let needs_rename = !is_correct && corrected_filename != original;

    let status = if is_correct {
        Status::Correct
    } else if needs_rename {
        Status::Renamed
    } else {
        Status::NotMatched
    };

    Decision {
        corrected_filename,
        is_correct,
        needs_rename,
        status,
    }
}
