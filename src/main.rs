//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `warc_stats` library that handles:
//! - Command-line argument parsing
//! - Logger initialization (console + log file)
//! - Exit status on failure
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use warc_stats::initialization::init_logger_with;
use warc_stats::{run_stats, Config, Opt};

fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    // run_stats validates again; this check has to happen before the
    // logger creates the log directory
    if let Err(e) = config.validate() {
        eprintln!("warc_stats error: {}", e);
        process::exit(1);
    }

    init_logger_with(
        config.log_level.clone().into(),
        config.log_format.clone(),
        Some(&config.log_dir),
    )
    .context("Failed to initialize logger")?;

    match run_stats(config) {
        Ok(report) => {
            log::debug!(
                "Finished in {:.2}s ({} records)",
                report.elapsed_seconds,
                report.statistics.total_records
            );
            Ok(())
        }
        Err(e) => {
            log::error!("warc_stats error: {:#}", e);
            process::exit(1);
        }
    }
}
