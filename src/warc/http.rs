//! HTTP message header parsing for `application/http` record blocks.

use std::borrow::Cow;

/// Status line (or request line) and header fields of an HTTP message
/// embedded in a WARC record block.
///
/// Only the header section is parsed; the payload body is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpHeaders {
    status_line: String,
    status_code: Option<u16>,
    fields: Vec<(String, String)>,
}

impl HttpHeaders {
    /// Parses the header section at the start of `block`.
    ///
    /// Returns `None` when the block does not start with a status or request
    /// line, i.e. the record carries no HTTP header set.
    pub fn parse(block: &[u8]) -> Option<Self> {
        let section = String::from_utf8_lossy(&block[..header_section_end(block)]);
        let mut lines = section.split('\n').map(|l| l.trim_end_matches('\r'));

        let status_line = lines.next()?.trim();
        if status_line.is_empty() {
            return None;
        }

        let mut fields: Vec<(String, String)> = Vec::new();
        for line in lines {
            if line.is_empty() {
                break;
            }
            if line.starts_with([' ', '\t']) {
                // obsolete line folding
                if let Some((_, value)) = fields.last_mut() {
                    value.push(' ');
                    value.push_str(line.trim());
                }
                continue;
            }
            // Lines without a colon are noise from broken servers; skip them.
            if let Some((name, value)) = line.split_once(':') {
                fields.push((name.trim().to_string(), value.trim().to_string()));
            }
        }

        Some(Self {
            status_code: parse_status_code(status_line),
            status_line: status_line.to_string(),
            fields,
        })
    }

    /// The first line of the message, e.g. `HTTP/1.1 200 OK`.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Numeric status code, absent for request lines and malformed status lines.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// First value of the named header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All header fields in message order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Offset of the blank line ending the header section, or the block length if
/// the block has none (header-only responses are sometimes written that way).
fn header_section_end(block: &[u8]) -> usize {
    let crlf = find(block, b"\r\n\r\n");
    let lf = find(block, b"\n\n");
    match (crlf, lf) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => block.len(),
    }
}

/// Whether `block[from..]` contains the blank line ending an HTTP header
/// section. Callers pass `from` a few bytes before newly read data so a
/// terminator split across reads is still found.
pub(crate) fn has_header_terminator(block: &[u8], from: usize) -> bool {
    let tail = &block[from.min(block.len())..];
    find(tail, b"\r\n\r\n").is_some() || find(tail, b"\n\n").is_some()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// `HTTP/1.1 404 Not Found` -> `Some(404)`.
fn parse_status_code(status_line: &str) -> Option<u16> {
    let mut parts = status_line.split_whitespace();
    let protocol = parts.next()?;
    if !protocol.to_ascii_uppercase().starts_with("HTTP/") {
        return None;
    }
    let code = parts.next()?;
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse::<u16>().ok().filter(|c| *c >= 100)
}

/// Removes the `<...>` wrapping some WARC/1.1 writers put around URIs.
pub(crate) fn strip_angle_brackets(value: &str) -> Cow<'_, str> {
    let trimmed = value.trim();
    match trimmed.strip_prefix('<').and_then(|v| v.strip_suffix('>')) {
        Some(inner) => Cow::Owned(inner.trim().to_string()),
        None => Cow::Borrowed(trimmed),
    }
}
