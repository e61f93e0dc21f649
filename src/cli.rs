use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "namefix")]
#[command(about = "Reconciles filenames against a canonical name list", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a folder against a canonical name list, optionally renaming files
    Check {
        /// Path to the canonical-name document ([[id, name], ...] JSON)
        names: PathBuf,

        /// Folder whose entries are reconciled
        folder: PathBuf,

        /// Rename mismatched files to their corrected spelling
        #[arg(long)]
        rename: bool,

        /// Directory where report artifacts are written
        #[arg(long = "output-dir", default_value = ".")]
        output_dir: PathBuf,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
