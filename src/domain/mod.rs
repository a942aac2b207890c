//! Host extraction from target URIs.
//!
//! Hosts are reported as the URI authority: the part between `//` and the
//! path, port and userinfo included. Unlike registrable-domain grouping,
//! `www.example.com` and `example.com` stay separate entries.

/// Extracts the authority of an absolute URI.
///
/// # Arguments
///
/// * `uri` - The `WARC-Target-URI` value
///
/// # Returns
///
/// The authority (e.g. `example.com:8080` from `http://example.com:8080/path`),
/// or `None` if the URI does not parse or has no authority (`dns:`, `urn:`,
/// relative references).
///
/// The `url` crate normalizes what it parses: special-scheme hosts are
/// lowercased and IDNA-encoded, and default ports are dropped.
pub fn extract_host(uri: &str) -> Option<String> {
    let parsed = url::Url::parse(uri.trim()).ok()?;
    let authority = parsed.authority();
    if authority.is_empty() {
        None
    } else {
        Some(authority.to_string())
    }
}
