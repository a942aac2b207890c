//! warc_stats library: statistics for Web ARChive (WARC) captures
//!
//! This library reads a WARC file in a single pass and reports record counts,
//! byte volume, per-host response counts, HTTP status and MIME type
//! distributions, and the list of responses whose status was not 200.
//!
//! # Example
//!
//! ```no_run
//! use warc_stats::{Config, run_stats};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("crawl.warc.gz"),
//!     output: Some(std::path::PathBuf::from("stats.json")),
//!     ..Default::default()
//! };
//!
//! let report = run_stats(config)?;
//! println!("{} records, {} non-200 responses",
//!          report.statistics.total_records, report.statistics.errors.len());
//! # Ok(())
//! # }
//! ```
//!
//! The aggregation engine in [`stats`] works on any iterator of records, so it
//! can be driven without touching the filesystem:
//!
//! ```
//! use warc_stats::stats::{aggregate, HttpFields, RecordFields};
//!
//! let records = vec![Ok::<_, std::io::Error>(RecordFields {
//!     record_type: "response".to_string(),
//!     content_length: Some(512),
//!     target_uri: Some("https://example.com/".to_string()),
//!     http: Some(HttpFields { status: Some(200), content_type: Some("text/html".into()) }),
//! })];
//! let stats = aggregate(records).unwrap();
//! assert_eq!(stats.hosts["example.com"], 1);
//! ```

#![warn(missing_docs)]

pub mod config;
mod domain;
pub mod error_handling;
pub mod initialization;
pub mod report;
mod run;
pub mod stats;
pub mod warc;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
pub use error_handling::{InitializationError, WarcError};
pub use run::{collect_statistics, run_stats, StatsReport};
pub use stats::{ErrorEntry, Statistics};
