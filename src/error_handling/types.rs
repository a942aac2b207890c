//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the logger with custom message (e.g., file creation).
    #[error("Logger initialization error: {0}")]
    LoggerSetupError(String),
}

/// Errors raised while reading a WARC archive.
///
/// Both variants are fatal: the reader stops after yielding one of them.
#[derive(Error, Debug)]
pub enum WarcError {
    /// The stream is not valid WARC (bad version line, header or framing).
    #[error("Malformed WARC record: {0}")]
    Malformed(String),

    /// The underlying stream failed, including truncation mid-record.
    #[error("I/O error while reading WARC stream: {0}")]
    Io(#[from] std::io::Error),
}

impl WarcError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        WarcError::Malformed(message.into())
    }
}
