//! Report output.
//!
//! Serializes a `Statistics` snapshot as pretty-printed JSON and writes it to
//! a file, a directory (using a fixed file name), or stdout.

mod pipe;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_REPORT_FILENAME;
use crate::stats::Statistics;

use pipe::IgnoreBrokenPipe;

/// Resolves the file the report is written to.
///
/// An existing directory gets `warc_stats.json` inside it; any other path is
/// used as given.
pub fn resolve_output_path(destination: &Path) -> PathBuf {
    if destination.is_dir() {
        destination.join(DEFAULT_REPORT_FILENAME)
    } else {
        destination.to_path_buf()
    }
}

/// Writes the report as JSON (2-space indentation, trailing newline).
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn render_report<W: Write>(stats: &Statistics, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, stats).context("Failed to serialize report")?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes the report to `destination`, or to stdout when it is `None`.
///
/// An existing file at the resolved path is overwritten.
///
/// # Returns
///
/// The path of the written file, or `None` for stdout.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_report(stats: &Statistics, destination: Option<&Path>) -> Result<Option<PathBuf>> {
    match destination {
        Some(destination) => {
            let path = resolve_output_path(destination);
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render_report(stats, &mut writer)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            Ok(Some(path))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = IgnoreBrokenPipe::new(stdout.lock());
            render_report(stats, &mut writer).context("Failed to write report to stdout")?;
            Ok(None)
        }
    }
}
