//! WARC record representation.

use crate::config::{CONTENT_TYPE, HTTP_BLOCK_CONTENT_TYPE, WARC_TARGET_URI, WARC_TYPE};
use crate::stats::{HttpFields, RecordFields};

use super::http::{strip_angle_brackets, HttpHeaders};

/// One record read from a WARC stream.
///
/// The block is retained only up to the reader's block limit; `content_length`
/// always reflects the declared length of the whole block.
#[derive(Debug, Clone)]
pub struct WarcRecord {
    pub(crate) version: String,
    pub(crate) header: Vec<(String, String)>,
    pub(crate) content_length: Option<u64>,
    pub(crate) block: Vec<u8>,
}

impl WarcRecord {
    /// Version line, e.g. `WARC/1.0`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// First value of the named record field (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All record fields in stream order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// `WARC-Type`, or the empty string when the field is missing.
    pub fn record_type(&self) -> &str {
        self.header(WARC_TYPE).unwrap_or("")
    }

    /// Declared block length in bytes.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// `WARC-Target-URI` without angle brackets; `None` when missing or blank.
    pub fn target_uri(&self) -> Option<String> {
        self.header(WARC_TARGET_URI)
            .map(strip_angle_brackets)
            .filter(|uri| !uri.is_empty())
            .map(|uri| uri.into_owned())
    }

    /// Retained prefix of the record block.
    pub fn block(&self) -> &[u8] {
        &self.block
    }

    /// Whether the block is declared to be an HTTP message.
    pub fn has_http_block(&self) -> bool {
        self.header(CONTENT_TYPE).is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with(HTTP_BLOCK_CONTENT_TYPE)
        })
    }

    /// HTTP header set of the embedded message, if the block is one.
    pub fn http_headers(&self) -> Option<HttpHeaders> {
        if !self.has_http_block() {
            return None;
        }
        HttpHeaders::parse(&self.block)
    }

    /// The fields the statistics engine works with.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            record_type: self.record_type().to_string(),
            content_length: self.content_length,
            target_uri: self.target_uri(),
            http: self.http_headers().map(|headers| HttpFields {
                status: headers.status_code(),
                content_type: headers.header(CONTENT_TYPE).map(str::to_string),
            }),
        }
    }
}

impl From<WarcRecord> for RecordFields {
    fn from(record: WarcRecord) -> Self {
        record.fields()
    }
}
