// Shared test helpers for building WARC fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds one WARC/1.0 record with the given fields and block.
#[allow(dead_code)] // Used by other test files
pub fn warc_record(fields: &[(&str, &str)], block: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"WARC/1.0\r\n");
    for (name, value) in fields {
        out.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
    }
    out.extend_from_slice(format!("Content-Length: {}\r\n\r\n", block.len()).as_bytes());
    out.extend_from_slice(block);
    out.extend_from_slice(b"\r\n\r\n");
    out
}

/// A `warcinfo` record.
#[allow(dead_code)] // Used by other test files
pub fn warcinfo_record() -> Vec<u8> {
    warc_record(
        &[
            ("WARC-Type", "warcinfo"),
            ("WARC-Record-ID", "<urn:uuid:00000000-0000-0000-0000-000000000001>"),
            ("Content-Type", "application/warc-fields"),
        ],
        b"software: warc_stats tests\r\nformat: WARC File Format 1.0\r\n",
    )
}

/// A `response` record wrapping an HTTP response with the given status line
/// and optional Content-Type header.
#[allow(dead_code)] // Used by other test files
pub fn http_response_record(uri: &str, status_line: &str, content_type: Option<&str>) -> Vec<u8> {
    let mut http = format!("{}\r\n", status_line);
    if let Some(ct) = content_type {
        http.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    http.push_str("Content-Length: 13\r\n\r\n<html></html>");

    warc_record(
        &[
            ("WARC-Type", "response"),
            ("WARC-Target-URI", uri),
            ("Content-Type", "application/http; msgtype=response"),
        ],
        http.as_bytes(),
    )
}

/// A `request` record for `uri`.
#[allow(dead_code)] // Used by other test files
pub fn http_request_record(uri: &str) -> Vec<u8> {
    warc_record(
        &[
            ("WARC-Type", "request"),
            ("WARC-Target-URI", uri),
            ("Content-Type", "application/http; msgtype=request"),
        ],
        b"GET / HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\n\r\n",
    )
}

/// Writes `data` to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_temp_warc(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(data).expect("Failed to write WARC data");
    file.flush().expect("Failed to flush file");
    file
}

/// Compresses each record as its own gzip member, the way crawlers write `.warc.gz`.
#[allow(dead_code)] // Used by other test files
pub fn gzip_per_record(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for record in records {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(record).expect("Failed to compress record");
        out.extend(encoder.finish().expect("Failed to finish gzip member"));
    }
    out
}
