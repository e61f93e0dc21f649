//! Nearest-canonical-name selection by case-insensitive Levenshtein distance.

use crate::core::errors::{Error, Result};
use crate::core::NameMatch;

/// Compute the Levenshtein edit distance between two strings.
///
/// Standard dynamic programming over Unicode scalar values with a two-row
/// buffer. Candidate and canonical names are short, so O(m*n) time is fine.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row = vec![0; b_chars.len() + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j] + cost) // substitution
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b_chars.len()]
}

/// Find the canonical name with minimum case-insensitive edit distance to the
/// candidate.
///
/// Scans in list order with a strictly-less-than comparison, so ties resolve
/// to the earliest entry. An empty list yields `Error::NoCandidates` rather
/// than a null match.
pub fn find_best_match(candidate: &str, canonical_names: &[String]) -> Result<NameMatch> {
    let candidate_lower = candidate.to_lowercase();

    let mut best: Option<NameMatch> = None;
    for name in canonical_names {
        let distance = levenshtein(&candidate_lower, &name.to_lowercase());
        match best {
            Some(ref m) if distance >= m.distance => {}
            _ => {
                best = Some(NameMatch {
                    name: name.clone(),
                    distance,
                });
            }
        }
    }

    best.ok_or(Error::NoCandidates)
}
