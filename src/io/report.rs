//! Report emission: JSON and CSV artifacts plus a terminal summary table.

use crate::core::{DecisionRecord, Status};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::Write;

/// Fixed artifact name for the structured report.
pub const JSON_REPORT_FILE: &str = "name-validation-results.json";
/// Fixed artifact name for the tabular report.
pub const CSV_REPORT_FILE: &str = "name-validation-results.csv";

const COLUMN_HEADERS: [&str; 6] = [
    "Original Filename",
    "Extracted Name",
    "Matched Name",
    "Corrected Filename",
    "Match Distance",
    "Status",
];

pub trait ReportWriter {
    fn write_records(&mut self, records: &[DecisionRecord]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_records(&mut self, records: &[DecisionRecord]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_records(&mut self, records: &[DecisionRecord]) -> anyhow::Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.writer);

        csv_writer.write_record(COLUMN_HEADERS)?;
        for record in records {
            let distance = record.distance.to_string();
            csv_writer.write_record([
                record.original.as_str(),
                record.extracted_name.as_str(),
                record.matched_name.as_str(),
                record.corrected_filename.as_str(),
                distance.as_str(),
                record.status.as_str(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Render the summary table and per-status counts to stdout.
pub fn print_summary(records: &[DecisionRecord]) {
    println!("\nValidation summary:");
    println!("{}", summary_table(records));
    println!("{}", summary_counts(records));
}

fn summary_table(records: &[DecisionRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMN_HEADERS.to_vec());

    for record in records {
        table.add_row(vec![
            Cell::new(&record.original),
            Cell::new(&record.extracted_name),
            Cell::new(&record.matched_name),
            Cell::new(&record.corrected_filename),
            Cell::new(record.distance),
            Cell::new(record.status.as_str()).fg(status_color(record.status)),
        ]);
    }
    table
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Correct => Color::Green,
        Status::Renamed => Color::Yellow,
        Status::NotMatched => Color::Red,
    }
}

fn summary_counts(records: &[DecisionRecord]) -> String {
    let count = |status| records.iter().filter(|r| r.status == status).count();
    format!(
        "{} correct, {} renamed, {} not matched ({} total)",
        count(Status::Correct).to_string().green(),
        count(Status::Renamed).to_string().yellow(),
        count(Status::NotMatched).to_string().red(),
        records.len()
    )
}
