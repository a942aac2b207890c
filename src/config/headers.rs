//! Header field name constants.
//!
//! WARC record fields and HTTP header names read by the record source.
//! Lookups are case-insensitive, so these only need to be spelled once.

// WARC record fields
/// Record type (`warcinfo`, `request`, `response`, ...)
pub const WARC_TYPE: &str = "WARC-Type";
/// URI of the captured resource
pub const WARC_TARGET_URI: &str = "WARC-Target-URI";
/// Length of the record block in bytes
pub const CONTENT_LENGTH: &str = "Content-Length";

// Shared by WARC records and HTTP messages
/// Content type of a WARC block or HTTP payload
pub const CONTENT_TYPE: &str = "Content-Type";

/// WARC block content type marking an embedded HTTP message.
pub const HTTP_BLOCK_CONTENT_TYPE: &str = "application/http";
