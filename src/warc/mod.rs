//! WARC record source.
//!
//! This module turns a WARC file into a lazy sequence of records:
//! - `open_warc()` opens a plain or gzip-compressed file
//! - `WarcReader` frames records (version line, fields, block, terminator)
//! - `WarcRecord` exposes the fields and the embedded HTTP header set
//!
//! Digests, segmentation and HTTP payload decoding are not handled.

mod http;
mod reader;
mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;

use crate::config::GZIP_MAGIC;
use crate::error_handling::WarcError;

pub use http::HttpHeaders;
pub use reader::{WarcReader, DEFAULT_BLOCK_LIMIT, DEFAULT_HEADER_SECTION_LIMIT, MAX_LINE_LENGTH};
pub use record::WarcRecord;

/// Opens a WARC file for reading.
///
/// Compression is detected from the first bytes of the file rather than the
/// extension. Gzip files may consist of one member per record, as written by
/// most crawlers, or a single member for the whole file.
///
/// The file handle is owned by the returned reader and closed when it is
/// dropped.
///
/// # Errors
///
/// Returns `WarcError::Io` if the file cannot be opened or read.
pub fn open_warc(path: &Path) -> Result<WarcReader<Box<dyn BufRead>>, WarcError> {
    let mut file = BufReader::new(File::open(path)?);
    let is_gzip = file.fill_buf()?.starts_with(&GZIP_MAGIC);

    let stream: Box<dyn BufRead> = if is_gzip {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(file)
    };

    Ok(WarcReader::new(stream))
}
