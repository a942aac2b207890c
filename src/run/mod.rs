//! Run orchestration.
//!
//! Ties the record source, the statistics engine and the reporter together
//! for a single input file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::Config;
use crate::report::write_report;
use crate::stats::{aggregate, Statistics};
use crate::warc::open_warc;

/// Results of a completed run.
#[derive(Debug, Clone)]
pub struct StatsReport {
    /// Statistics for the whole capture
    pub statistics: Statistics,
    /// File the report was written to; `None` when printed to stdout
    pub output_path: Option<PathBuf>,
    /// Wall-clock duration of the run
    pub elapsed_seconds: f64,
}

/// Reads a WARC file and returns its statistics.
///
/// The file is closed before this function returns, on success and on error.
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be opened, or if the
/// stream is truncated or malformed. No partial statistics are returned.
pub fn collect_statistics(path: &Path) -> Result<Statistics> {
    let reader = open_warc(path)
        .with_context(|| format!("Failed to open WARC file: {}", path.display()))?;
    aggregate(reader).with_context(|| format!("Failed to read WARC file: {}", path.display()))
}

/// Runs a complete statistics pass: validate, read, aggregate, report.
///
/// # Arguments
///
/// * `config` - Input file, report destination and logging options
///
/// # Returns
///
/// A `StatsReport` once the report has been emitted.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the archive cannot be
/// read, or the report cannot be written. Nothing is written in that case.
pub fn run_stats(config: Config) -> Result<StatsReport> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    let start_time = Instant::now();
    info!("Processing: {}", config.file.display());

    let statistics = collect_statistics(&config.file)?;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Read {} in {:.2}s",
        statistics.summary(),
        elapsed_seconds
    );
    debug!(
        "{} record types, {} status codes, {} MIME types",
        statistics.record_types.len(),
        statistics.http_status_codes.len(),
        statistics.mime_types.len()
    );

    let output_path = write_report(&statistics, config.output.as_deref())?;
    if let Some(path) = &output_path {
        info!("Statistics written to {}", path.display());
    }

    Ok(StatsReport {
        statistics,
        output_path,
        elapsed_seconds,
    })
}
