//! Error handling.
//!
//! This module provides the error types for the fatal failure classes:
//! - **Initialization**: logger setup failed
//! - **Archive**: the WARC stream is unreadable or malformed
//!
//! Configuration errors live next to the configuration (`ConfigValidationError`).
//! Non-200 HTTP responses are not errors at this level; they are recorded as
//! data in the statistics report.

mod types;

// Re-export public API
pub use types::{InitializationError, WarcError};
