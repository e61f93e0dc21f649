pub mod report;

use crate::core::errors::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// List the names of every entry in a folder, sorted for a deterministic
/// listing order. No filtering by entry type: subdirectories are listed too.
pub fn list_folder(path: &Path) -> Result<Vec<String>> {
    let mut entries: Vec<String> = fs::read_dir(path)?
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    Ok(entries)
}

pub fn rename_in_folder(folder: &Path, from: &str, to: &str) -> std::io::Result<()> {
    fs::rename(folder.join(from), folder.join(to))
}
