//! The `check` command: load the registry, run the reconciliation pass, and
//! emit the report artifacts.

use crate::io::report::{CsvWriter, JsonWriter, ReportWriter, CSV_REPORT_FILE, JSON_REPORT_FILE};
use crate::{io, pipeline, registry};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;

pub struct CheckConfig {
    pub names: PathBuf,
    pub folder: PathBuf,
    pub rename: bool,
    pub output_dir: PathBuf,
}

pub fn handle_check(config: CheckConfig) -> Result<()> {
    let canonical_names = registry::load_canonical_names(&config.names)
        .with_context(|| format!("Failed to load canonical names from {:?}", config.names))?;
    log::debug!("Loaded {} canonical names", canonical_names.len());

    let records = pipeline::run_pass(&config.folder, &canonical_names, config.rename)
        .with_context(|| format!("Failed to process folder {:?}", config.folder))?;

    io::ensure_dir(&config.output_dir)?;

    let json_path = config.output_dir.join(JSON_REPORT_FILE);
    let json_file = File::create(&json_path)
        .with_context(|| format!("Failed to create report {json_path:?}"))?;
    JsonWriter::new(json_file).write_records(&records)?;
    println!("Report saved to {}", json_path.display());

    let csv_path = config.output_dir.join(CSV_REPORT_FILE);
    let csv_file = File::create(&csv_path)
        .with_context(|| format!("Failed to create report {csv_path:?}"))?;
    CsvWriter::new(csv_file).write_records(&records)?;
    println!("Spreadsheet saved to {}", csv_path.display());

    io::report::print_summary(&records);

    Ok(())
}
