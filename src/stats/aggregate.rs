//! Single-pass accumulation of record statistics.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::extract_host;

use super::classify::{is_error_status, normalize_mime_type, response_http};
use super::snapshot::{ErrorEntry, Statistics};
use super::RecordFields;

/// Mutable counters for one run.
///
/// Created empty, fed one record at a time with `observe()`, then consumed by
/// `finish()`. Counts only ever increase.
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    total_records: u64,
    total_bytes: u64,
    record_types: HashMap<String, u64>,
    hosts: HashMap<String, u64>,
    http_status_codes: HashMap<u16, u64>,
    mime_types: HashMap<String, u64>,
    errors: Vec<ErrorEntry>,
}

impl StatsAccumulator {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the counters.
    pub fn observe(&mut self, record: &RecordFields) {
        self.total_records += 1;
        increment_str(&mut self.record_types, &record.record_type);

        if let Some(length) = record.content_length {
            self.total_bytes = self.total_bytes.saturating_add(length);
        }

        let Some(http) = response_http(record) else {
            return;
        };

        if let Some(host) = record.target_uri.as_deref().and_then(extract_host) {
            increment(&mut self.hosts, host);
        }

        if let Some(status) = http.status {
            increment(&mut self.http_status_codes, status);
            if is_error_status(status) {
                self.errors.push(ErrorEntry {
                    url: record.target_uri.clone(),
                    status,
                });
            }
        }

        if let Some(mime) = http.content_type.as_deref().and_then(normalize_mime_type) {
            increment_str(&mut self.mime_types, mime);
        }
    }

    /// Records observed so far.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Freezes the counters into an ordered snapshot.
    pub fn finish(self) -> Statistics {
        Statistics {
            total_records: self.total_records,
            total_bytes: self.total_bytes,
            errors: self.errors,
            hosts: self.hosts.into_iter().collect(),
            http_status_codes: self.http_status_codes.into_iter().collect(),
            mime_types: self.mime_types.into_iter().collect(),
            record_types: self.record_types.into_iter().collect(),
        }
    }
}

fn increment<K: Eq + Hash>(map: &mut HashMap<K, u64>, key: K) {
    *map.entry(key).or_insert(0) += 1;
}

/// Like `increment`, but only allocates the key the first time it is seen.
fn increment_str(map: &mut HashMap<String, u64>, key: &str) {
    match map.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            map.insert(key.to_string(), 1);
        }
    }
}

/// Consumes a record sequence and returns its statistics.
///
/// Records are pulled one at a time and dropped once counted. The first error
/// from the sequence aborts the run and is returned as is; counts gathered up
/// to that point are discarded.
///
/// # Errors
///
/// Returns the first `Err` yielded by `records`.
pub fn aggregate<I, R, E>(records: I) -> Result<Statistics, E>
where
    I: IntoIterator<Item = Result<R, E>>,
    R: Into<RecordFields>,
{
    let mut accumulator = StatsAccumulator::new();
    for record in records {
        accumulator.observe(&record?.into());
    }
    Ok(accumulator.finish())
}
