//! Single pass over a directory listing: parse, match, decide, and
//! optionally rename, collecting one `DecisionRecord` per entry.

use crate::core::errors::{Error, Result};
use crate::core::DecisionRecord;
use crate::decision::decide;
use crate::io;
use crate::matcher::find_best_match;
use crate::parser::parse_filename;
use std::path::Path;

/// Reconcile every entry of `folder` against the canonical names.
///
/// The listing is read once before any rename, so renames performed mid-pass
/// never affect the set of entries processed. Rename failures are logged and
/// local to the affected entry; the pass always runs to completion.
pub fn run_pass(
    folder: &Path,
    canonical_names: &[String],
    rename_enabled: bool,
) -> Result<Vec<DecisionRecord>> {
    let entries = io::list_folder(folder)?;

    entries
        .iter()
        .map(|filename| process_entry(folder, filename, canonical_names, rename_enabled))
        .collect()
}

fn process_entry(
    folder: &Path,
    filename: &str,
    canonical_names: &[String],
    rename_enabled: bool,
) -> Result<DecisionRecord> {
    let parsed = parse_filename(filename);
    let best = find_best_match(&parsed.candidate, canonical_names)?;
    let decision = decide(filename, &parsed, &best);

    let rename_performed = if rename_enabled && decision.needs_rename {
        attempt_rename(folder, filename, &decision.corrected_filename)
    } else {
        false
    };

    Ok(DecisionRecord {
        original: filename.to_string(),
        extracted_name: parsed.candidate,
        matched_name: best.name,
        corrected_filename: decision.corrected_filename,
        distance: best.distance,
        status: decision.status,
        rename_performed,
    })
}

/// Attempt the filesystem rename. A failure is logged and reported as
/// `false`; it never aborts the pass.
fn attempt_rename(folder: &Path, from: &str, to: &str) -> bool {
    match io::rename_in_folder(folder, from, to) {
        Ok(()) => {
            log::info!("Renamed: {from} -> {to}");
            true
        }
        Err(source) => {
            let err = Error::Rename {
                from: folder.join(from),
                to: folder.join(to),
                source,
            };
            log::warn!("{err}");
            false
        }
    }
}
