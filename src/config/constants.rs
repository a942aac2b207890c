//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including default paths, file names and archive format markers.

/// File name used for the report when `--output` points at a directory.
pub const DEFAULT_REPORT_FILENAME: &str = "warc_stats.json";

/// Default directory for the log file.
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Name of the log file created inside the log directory.
pub const LOG_FILENAME: &str = "warc_stats.log";

/// Prefix shared by every supported WARC version line (WARC/1.0 and WARC/1.1).
pub const WARC_VERSION_PREFIX: &str = "WARC/1.";

/// Magic bytes at the start of a gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Record type whose HTTP payload feeds the host, status and MIME tables.
pub const RESPONSE_RECORD_TYPE: &str = "response";

/// The only HTTP status that is not reported in `errors`.
///
/// Redirects and other 2xx codes are deliberately flagged as well.
pub const SUCCESS_STATUS: u16 = 200;

/// Expected capacity of a record's header field map.
/// Most crawlers emit fewer than 16 WARC header fields per record.
pub const EXPECTED_HEADER_FIELDS: usize = 16;
