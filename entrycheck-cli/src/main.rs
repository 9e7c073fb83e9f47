//! entrycheck — checks that a package's published entry-point fields
//! (`main`, `module`, `umd:main`, `browser`, `react-native`) match what a
//! build would write, and that each entry-point's source lives inside its
//! package.
//!
//! Usage:
//!   entrycheck validate [DIR]
//!
//! Nothing is modified; the first violation is reported.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use entrycheck_cli::exit_codes::{codes, exit_code_for};
use entrycheck_cli::validate_directory;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "entrycheck", version)]
#[command(about = "Validate package entry-point fields against their build outputs")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate every package and entry-point in a project
    Validate {
        /// Project root containing package.json
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Only report failures, not each passing check
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Validate { directory, quiet } => match validate_directory(&directory, !quiet) {
            Ok(()) => ExitCode::from(codes::SUCCESS),
            Err(err) => {
                error!("{err:#}");
                ExitCode::from(exit_code_for(&err))
            }
        },
    }
}
