// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod decision;
pub mod io;
pub mod matcher;
pub mod parser;
pub mod pipeline;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{errors::Error, DecisionRecord, NameMatch, ParsedName, Status};

pub use crate::decision::{decide, Decision};
pub use crate::matcher::{find_best_match, levenshtein};
pub use crate::parser::parse_filename;
pub use crate::pipeline::run_pass;
pub use crate::registry::load_canonical_names;
