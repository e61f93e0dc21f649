pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification for a single directory entry.
///
/// `Renamed` reflects eligibility, not execution: a record is `Renamed`
/// whenever a rename is warranted, whether or not rename mode was active or
/// the filesystem rename succeeded. `DecisionRecord::rename_performed` carries
/// the actual outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Correct,
    Renamed,
    NotMatched,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Correct => "Correct",
            Status::Renamed => "Renamed",
            Status::NotMatched => "Not Matched",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filename split at the first `_` delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    /// Portion before the first `_`, trimmed of surrounding whitespace.
    pub candidate: String,
    /// Everything from the first `_` onward, delimiter included. Empty when
    /// the filename contains no delimiter.
    pub suffix: String,
}

/// The canonical name closest to a candidate, with its edit distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameMatch {
    pub name: String,
    pub distance: usize,
}

/// One reconciliation result per directory entry, in listing order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub original: String,
    pub extracted_name: String,
    pub matched_name: String,
    pub corrected_filename: String,
    pub distance: usize,
    pub status: Status,
    /// True only when rename mode was active, a rename was warranted, and the
    /// filesystem rename succeeded.
    pub rename_performed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Correct.to_string(), "Correct");
        assert_eq!(Status::Renamed.to_string(), "Renamed");
        assert_eq!(Status::NotMatched.to_string(), "Not Matched");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Status::NotMatched).unwrap(),
            "\"not_matched\""
        );
    }
}
