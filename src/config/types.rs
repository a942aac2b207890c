//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_LOG_DIR;
use crate::report::resolve_output_path;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the CLI.
///
/// # Examples
///
/// ```no_run
/// use warc_stats::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("crawl.warc.gz"),
///     output: Some(PathBuf::from("reports/")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// WARC file to read (plain or gzip-compressed)
    pub file: PathBuf,

    /// Report destination: a file path, or an existing directory.
    /// `None` prints the report to stdout.
    pub output: Option<PathBuf>,

    /// Directory holding the log file
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("capture.warc.gz"),
            output: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks the configuration before any file is opened.
    ///
    /// Existence of the input file is not checked here; an unreadable input is
    /// reported when the archive is opened, with the underlying I/O error.
    ///
    /// # Errors
    ///
    /// Returns the first field that is invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "file",
                message: "input path must not be empty (expected a .warc or .warc.gz file)"
                    .to_string(),
            });
        }

        if self.file.is_dir() {
            return Err(ConfigValidationError {
                field: "file",
                message: format!(
                    "{} is a directory (expected a .warc or .warc.gz file)",
                    self.file.display()
                ),
            });
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(ConfigValidationError {
                    field: "output",
                    message: "output path must not be empty (omit --output to print to stdout)"
                        .to_string(),
                });
            }
            if output == &self.file || same_file(&resolve_output_path(output), &self.file) {
                return Err(ConfigValidationError {
                    field: "output",
                    message: format!(
                        "{} is the input archive; choose a different report path",
                        output.display()
                    ),
                });
            }
        }

        if self.log_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "log_dir",
                message: format!("log directory must not be empty (default: {DEFAULT_LOG_DIR})"),
            });
        }

        Ok(())
    }
}

/// Whether two paths name the same existing file, after resolving `..` and
/// symlinks.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// warc_stats crawl.warc.gz
/// warc_stats crawl.warc.gz -o reports/ --log-dir /var/log/warc_stats
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "warc_stats",
    about = "Get WARC info & stats: hosts, HTTP status codes, MIME types and record types."
)]
pub struct Opt {
    /// Path to the WARC file
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Output JSON file path (or an existing directory); prints to stdout if omitted
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long, value_parser, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            output: opt.output,
            log_dir: opt.log_dir,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
