//! Finalized statistics snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::SUCCESS_STATUS;

/// A `response` record whose HTTP status was not 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// `WARC-Target-URI` of the record, if it had one
    pub url: Option<String>,
    /// HTTP status code
    pub status: u16,
}

/// Statistics for one WARC capture.
///
/// Maps are ordered so the serialized report is identical across runs over
/// the same input. Field order is the report's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of records read
    pub total_records: u64,
    /// Sum of declared block lengths
    pub total_bytes: u64,
    /// Non-200 responses in input order
    pub errors: Vec<ErrorEntry>,
    /// Response count per target URI authority
    pub hosts: BTreeMap<String, u64>,
    /// Response count per HTTP status code
    pub http_status_codes: BTreeMap<u16, u64>,
    /// Response count per MIME type (parameters stripped)
    pub mime_types: BTreeMap<String, u64>,
    /// Record count per `WARC-Type`
    pub record_types: BTreeMap<String, u64>,
}

impl Statistics {
    /// Total number of `response` records counted per status code.
    pub fn responses_with_status(&self) -> u64 {
        self.http_status_codes.values().sum()
    }

    /// Responses whose status is not 200; always equals `errors.len()`.
    pub fn non_success_responses(&self) -> u64 {
        self.http_status_codes
            .iter()
            .filter(|(status, _)| **status != SUCCESS_STATUS)
            .map(|(_, count)| count)
            .sum()
    }

    /// Whether no record was read.
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} record{} ({} bytes), {} host{}, {} non-200 response{}",
            self.total_records,
            if self.total_records == 1 { "" } else { "s" },
            self.total_bytes,
            self.hosts.len(),
            if self.hosts.len() == 1 { "" } else { "s" },
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" },
        )
    }
}
