use anyhow::Result;
use namefix::cli::{parse_args, Commands};
use namefix::commands::check::{handle_check, CheckConfig};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = parse_args();

    match cli.command {
        Commands::Check {
            names,
            folder,
            rename,
            output_dir,
            verbosity,
        } => {
            init_logging(verbosity);
            handle_check(CheckConfig {
                names,
                folder,
                rename,
                output_dir,
            })
        }
    }
}

// Map repeated -v flags to a default log filter; RUST_LOG still wins
fn init_logging(verbosity: u8) {
    // Renames and rename failures are logged at info/warn, so they are
    // visible without any -v flags.
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
