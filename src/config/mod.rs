//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, format markers)
//! - WARC and HTTP header name constants
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
