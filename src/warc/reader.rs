//! Streaming WARC record reader.

use std::io::{self, BufRead, Read};

use crate::config::{
    CONTENT_LENGTH, CONTENT_TYPE, EXPECTED_HEADER_FIELDS, HTTP_BLOCK_CONTENT_TYPE,
    WARC_VERSION_PREFIX,
};
use crate::error_handling::WarcError;

use super::http::has_header_terminator;
use super::record::WarcRecord;

/// Bytes of each record block kept in memory. Payload bytes beyond this are
/// skipped without buffering.
pub const DEFAULT_BLOCK_LIMIT: usize = 64 * 1024;

/// Upper bound on the bytes kept for an `application/http` block whose header
/// section does not end within `DEFAULT_BLOCK_LIMIT`.
pub const DEFAULT_HEADER_SECTION_LIMIT: usize = 1024 * 1024;

/// Longest version or header line accepted, terminator included.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Pull-based reader over a WARC stream.
///
/// Yields one record per call to `next()`. After the first error the reader
/// is exhausted and only returns `None`.
pub struct WarcReader<R> {
    read: R,
    valid_state: bool,
    block_limit: usize,
    header_section_limit: usize,
    records_read: u64,
}

impl<R: BufRead> WarcReader<R> {
    /// Wraps a buffered stream positioned at the start of a record.
    pub fn new(read: R) -> Self {
        Self {
            read,
            valid_state: true,
            block_limit: DEFAULT_BLOCK_LIMIT,
            header_section_limit: DEFAULT_HEADER_SECTION_LIMIT,
            records_read: 0,
        }
    }

    /// Sets how many bytes of each block are retained on the record.
    pub fn with_block_limit(mut self, block_limit: usize) -> Self {
        self.block_limit = block_limit;
        self
    }

    /// Sets how far past the block limit an HTTP block is read while looking
    /// for the end of its header section.
    pub fn with_header_section_limit(mut self, header_section_limit: usize) -> Self {
        self.header_section_limit = header_section_limit;
        self
    }

    /// Number of records successfully read so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Reads one line, returning `None` at end of stream.
    /// Line terminators are stripped; bytes that are not UTF-8 are replaced.
    fn read_line(&mut self) -> Result<Option<String>, WarcError> {
        let mut buf = Vec::new();
        let n = (&mut self.read)
            .take(MAX_LINE_LENGTH as u64)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if n == MAX_LINE_LENGTH && !buf.ends_with(b"\n") {
            return Err(WarcError::malformed(format!(
                "Line exceeds {MAX_LINE_LENGTH} bytes"
            )));
        }
        Ok(Some(
            String::from_utf8_lossy(&buf)
                .trim_end_matches(['\r', '\n'])
                .to_string(),
        ))
    }

    fn read_record(&mut self) -> Result<Option<WarcRecord>, WarcError> {
        // blank lines between records are tolerated
        let version = loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line.trim().to_string(),
            }
        };

        if !version.starts_with(WARC_VERSION_PREFIX) {
            return Err(WarcError::malformed(format!(
                "Unknown WARC version: {version}"
            )));
        }

        let header = self.read_header()?;

        let content_length = match header
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(CONTENT_LENGTH))
        {
            Some((_, value)) => Some(value.parse::<u64>().map_err(|_| {
                WarcError::malformed(format!("Content-Length is not a number: {value}"))
            })?),
            None => None,
        };

        let http_block = header
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(CONTENT_TYPE))
            .is_some_and(|(_, ct)| {
                ct.trim_start()
                    .to_ascii_lowercase()
                    .starts_with(HTTP_BLOCK_CONTENT_TYPE)
            });

        let block = self.read_block(content_length.unwrap_or(0), http_block)?;
        self.read_record_end()?;

        self.records_read += 1;
        Ok(Some(WarcRecord {
            version,
            header,
            content_length,
            block,
        }))
    }

    fn read_header(&mut self) -> Result<Vec<(String, String)>, WarcError> {
        let mut header: Vec<(String, String)> = Vec::with_capacity(EXPECTED_HEADER_FIELDS);

        loop {
            let line = self.read_line()?.ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream ended inside a record header",
                )
            })?;

            if line.is_empty() {
                return Ok(header);
            }

            if line.starts_with([' ', '\t']) {
                match header.last_mut() {
                    Some((_, value)) => {
                        value.push(' ');
                        value.push_str(line.trim());
                        continue;
                    }
                    None => {
                        return Err(WarcError::malformed(
                            "Continuation line before first header field",
                        ))
                    }
                }
            }

            match line.split_once(':') {
                Some((name, value)) => {
                    header.push((name.trim_end().to_string(), value.trim().to_string()))
                }
                None => {
                    return Err(WarcError::malformed(format!(
                        "Invalid header field: {line}"
                    )))
                }
            }
        }
    }

    /// Reads a block of `len` bytes, keeping at most `block_limit` of them.
    ///
    /// For HTTP blocks the retained prefix is extended, up to
    /// `header_section_limit`, until it holds the whole header section.
    fn read_block(&mut self, len: u64, http_block: bool) -> Result<Vec<u8>, WarcError> {
        let retained = len.min(self.block_limit as u64);
        let mut block = Vec::with_capacity(retained as usize);
        let mut kept = (&mut self.read).take(retained).read_to_end(&mut block)? as u64;

        if http_block {
            let limit = len.min(self.header_section_limit.max(self.block_limit) as u64);
            let mut searched = 0;
            while kept < limit && !has_header_terminator(&block, searched) {
                // a terminator may straddle the previous read
                searched = block.len().saturating_sub(3);
                let step = (limit - kept).min(self.block_limit.max(1) as u64);
                let n = (&mut self.read).take(step).read_to_end(&mut block)? as u64;
                if n == 0 {
                    break;
                }
                kept += n;
            }
        }

        let skipped = io::copy(&mut (&mut self.read).take(len - kept), &mut io::sink())?;

        if kept + skipped < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "record block truncated: expected {len} bytes, got {}",
                    kept + skipped
                ),
            )
            .into());
        }
        Ok(block)
    }

    /// Every block is followed by two line breaks.
    fn read_record_end(&mut self) -> Result<(), WarcError> {
        for _ in 0..2 {
            match self.read_line()? {
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "stream ended before the record terminator",
                    )
                    .into())
                }
                Some(line) if line.is_empty() => {}
                Some(_) => {
                    return Err(WarcError::malformed(
                        "No double linefeed after record content",
                    ))
                }
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for WarcReader<R> {
    type Item = Result<WarcRecord, WarcError>;

    fn next(&mut self) -> Option<Result<WarcRecord, WarcError>> {
        if !self.valid_state {
            return None;
        }

        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.valid_state = false;
                None
            }
            Err(e) => {
                self.valid_state = false;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for WarcReader<R> {}
