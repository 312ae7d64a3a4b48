#![deny(missing_docs)]

//! # Restdoc CLI
//!
//! Command Line Interface for the resource description to Markdown generator.
//!
//! Supported Commands:
//! - `generate`: Renders resource and operation pages from a folder of resource descriptions.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::error::CliResult;
use crate::logging::{init_logging, LogFormat, LoggingConfig};

mod error;
mod generate;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Markdown API reference generator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[clap(short, long, global = true)]
    quiet: bool,

    /// Log output format.
    #[clap(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render Markdown pages from resource description files.
    Generate(generate::GenerateArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    init_logging(&LoggingConfig::from_verbosity(
        cli.verbose,
        cli.quiet,
        cli.log_format,
    ))?;

    match &cli.command {
        Commands::Generate(args) => {
            let report = generate::execute(args)?;
            tracing::info!(
                processed = report.processed,
                written = report.written,
                methods = report.counters.methods,
                "generation complete"
            );
            if report.skipped > 0 {
                tracing::warn!(skipped = report.skipped, "some input files were skipped");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
