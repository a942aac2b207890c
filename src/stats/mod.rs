//! Record-stream statistics.
//!
//! This module is the aggregation engine:
//! - `RecordFields`: the per-record view the engine works with
//! - `StatsAccumulator`: mutable counters for a single pass
//! - `Statistics`: the frozen, ordered snapshot handed to the reporter
//! - `aggregate()`: drives a record sequence through the accumulator
//!
//! It performs no I/O and no logging, so any iterator of records can be
//! aggregated, including in-memory fixtures.

mod aggregate;
mod classify;
mod snapshot;

pub use aggregate::{aggregate, StatsAccumulator};
pub use classify::{is_error_status, normalize_mime_type};
pub use snapshot::{ErrorEntry, Statistics};

/// Fields of one WARC record that the statistics depend on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    /// `WARC-Type` tag; open-ended, empty if the record had none
    pub record_type: String,
    /// Declared block length
    pub content_length: Option<u64>,
    /// `WARC-Target-URI`
    pub target_uri: Option<String>,
    /// HTTP header set, present when the block is an HTTP message
    pub http: Option<HttpFields>,
}

/// Fields read from an HTTP header set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpFields {
    /// Status code; absent for requests and malformed status lines
    pub status: Option<u16>,
    /// Raw `Content-Type` header value, parameters included
    pub content_type: Option<String>,
}
