//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Log lines go to stderr and, when a log directory is given, are appended to
//! a log file in that directory as well.

use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::config::{LogFormat, LOG_FILENAME};
use crate::error_handling::InitializationError;
use colored::*;
use log::{LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
/// * `log_dir` - Directory for the log file; created if missing. `None` logs to stderr only.
///
/// # Returns
///
/// The path of the log file, if one was opened.
///
/// # Errors
///
/// Returns `InitializationError::LoggerSetupError` if the log directory or file
/// cannot be created, and `InitializationError::LoggerError` if a logger is
/// already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=warc_stats=debug warc_stats crawl.warc.gz
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    log_dir: Option<&Path>,
) -> Result<Option<PathBuf>, InitializationError> {
    let log_file = log_dir.map(open_log_file).transpose()?;
    let log_path = log_file.as_ref().map(|(path, _)| path.clone());

    colored::control::set_override(io::stderr().is_terminal());

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("warc_stats", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| write_json_line(buf, record)),
        LogFormat::Plain => builder.format(|buf, record| write_plain_line(buf, record)),
    };

    let writer = TeeWriter {
        console: io::stderr(),
        file: log_file.map(|(_, file)| file),
    };
    builder.target(env_logger::Target::Pipe(Box::new(writer)));

    // try_init() so tests can call this more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(log_path)
}

/// One JSON object per line: `ts` (epoch millis), `level`, `target`, `msg`.
fn write_json_line<W: Write>(buf: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn write_plain_line<W: Write>(buf: &mut W, record: &Record) -> io::Result<()> {
    let level = record.level();
    let colored_level = match level {
        log::Level::Error => level.to_string().red(),
        log::Level::Warn => level.to_string().yellow(),
        log::Level::Info => level.to_string().green(),
        log::Level::Debug => level.to_string().blue(),
        log::Level::Trace => level.to_string().purple(),
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.target().cyan(),
        colored_level,
        record.args()
    )
}

fn open_log_file(dir: &Path) -> Result<(PathBuf, File), InitializationError> {
    fs::create_dir_all(dir).map_err(|e| {
        InitializationError::LoggerSetupError(format!(
            "Failed to create log directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(LOG_FILENAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            InitializationError::LoggerSetupError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;

    Ok((path, file))
}

/// Writes every log line to the console and, without color codes, to the log file.
struct TeeWriter<C, F> {
    console: C,
    file: Option<F>,
}

impl<C: Write, F: Write> Write for TeeWriter<C, F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Removes ANSI CSI escape sequences (`ESC [ ... final-byte`).
fn strip_ansi(buf: &[u8]) -> Cow<'_, [u8]> {
    if !buf.contains(&0x1b) {
        return Cow::Borrowed(buf);
    }

    let mut out = Vec::with_capacity(buf.len());
    let mut bytes = buf.iter().copied().peekable();
    while let Some(b) = bytes.next() {
        if b == 0x1b && bytes.peek() == Some(&b'[') {
            bytes.next();
            // parameters and intermediates, up to and including the final byte
            for c in bytes.by_ref() {
                if (0x40..=0x7e).contains(&c) {
                    break;
                }
            }
        } else {
            out.push(b);
        }
    }
    Cow::Owned(out)
}
