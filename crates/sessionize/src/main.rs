use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use sessionize_core::sessionize;
use sessionize_ingest::{read_events, write_sessions};

mod config;
mod logging;

use logging::{init_tracing, LogFormat};

#[derive(Parser, Debug)]
#[command(
    name = "sessionize",
    about = "Reconstruct per-client sessions from a web access log",
    version
)]
struct Cli {
    /// CSV access log with ip, date and time columns
    log_file: PathBuf,

    /// Text file holding the inactivity period in seconds
    inactivity_file: PathBuf,

    /// Destination file for the session rows
    output_file: PathBuf,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Print session rows as JSON to stdout instead of writing the output file
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing("info", cli.log_format);

    let inactivity_secs = config::read_inactivity_period(&cli.inactivity_file)?;
    info!("Using inactivity period of {}s", inactivity_secs);

    let log = read_events(&cli.log_file)?;
    if log.skipped > 0 {
        info!("Dropped {} malformed line(s)", log.skipped);
    }
    info!("Ingested {} event(s)", log.events.len());

    let records = sessionize(&log.events, inactivity_secs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        write_sessions(&cli.output_file, &records)?;
        info!(
            "Wrote {} session(s) to {}",
            records.len(),
            cli.output_file.display()
        );
    }

    if records.is_empty() {
        eprintln!("{}", "No sessions found.".dimmed());
    }

    Ok(())
}
