//! Record classification and field normalization rules.

use crate::config::{RESPONSE_RECORD_TYPE, SUCCESS_STATUS};

use super::{HttpFields, RecordFields};

/// The HTTP header set of a record that feeds the host, status and MIME
/// tables: it must be a `response` and carry one.
pub fn response_http(record: &RecordFields) -> Option<&HttpFields> {
    if record.record_type == RESPONSE_RECORD_TYPE {
        record.http.as_ref()
    } else {
        None
    }
}

/// Anything but exactly 200 is reported, including redirects and other 2xx.
pub fn is_error_status(status: u16) -> bool {
    status != SUCCESS_STATUS
}

/// `text/html; charset=utf-8` -> `text/html`.
///
/// Returns `None` when nothing is left once parameters are removed.
pub fn normalize_mime_type(content_type: &str) -> Option<&str> {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    (!mime.is_empty()).then_some(mime)
}
