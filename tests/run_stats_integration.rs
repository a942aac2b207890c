//! Integration tests for run_stats and collect_statistics
//!
//! These tests build small WARC files on disk and verify:
//! - Statistics for mixed captures, empty captures and non-HTTP responses
//! - Report destination handling (file and directory)
//! - Gzip input and deterministic output
//! - Fatal errors for unreadable and corrupt input

mod helpers;

use std::fs;
use std::path::PathBuf;

use helpers::{
    gzip_per_record, http_request_record, http_response_record, warc_record, warcinfo_record,
    write_temp_warc,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use warc_stats::{collect_statistics, run_stats, Config, ErrorEntry, LogFormat, LogLevel};

const URI_OK: &str = "http://example.com/";
const URI_MISSING: &str = "http://example.com/missing";

/// warcinfo + 200 text/html + 404 text/html; charset=utf-8, same host.
fn mixed_capture() -> Vec<Vec<u8>> {
    vec![
        warcinfo_record(),
        http_response_record(URI_OK, "HTTP/1.1 200 OK", Some("text/html")),
        http_response_record(
            URI_MISSING,
            "HTTP/1.1 404 Not Found",
            Some("text/html; charset=utf-8"),
        ),
    ]
}

/// Sum of Content-Length values, read back from the fixture bytes.
fn declared_bytes(records: &[Vec<u8>]) -> u64 {
    records
        .iter()
        .map(|r| {
            let text = String::from_utf8_lossy(r);
            let line = text
                .lines()
                .find(|l| l.starts_with("Content-Length: "))
                .expect("fixture has Content-Length");
            line["Content-Length: ".len()..].trim().parse::<u64>().unwrap()
        })
        .sum()
}

fn create_test_config(input_file: PathBuf, output: PathBuf, log_dir: PathBuf) -> Config {
    Config {
        file: input_file,
        output: Some(output),
        log_dir,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

#[test]
fn test_mixed_capture_statistics() {
    let records = mixed_capture();
    let file = write_temp_warc(&records.concat());

    let stats = collect_statistics(file.path()).expect("statistics");

    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.total_bytes, declared_bytes(&records));
    assert_eq!(stats.record_types.len(), 2);
    assert_eq!(stats.record_types["warcinfo"], 1);
    assert_eq!(stats.record_types["response"], 2);
    assert_eq!(stats.hosts.len(), 1);
    assert_eq!(stats.hosts["example.com"], 2);
    assert_eq!(stats.http_status_codes.len(), 2);
    assert_eq!(stats.http_status_codes[&200], 1);
    assert_eq!(stats.http_status_codes[&404], 1);
    assert_eq!(stats.mime_types.len(), 1);
    assert_eq!(stats.mime_types["text/html"], 2);
    assert_eq!(
        stats.errors,
        vec![ErrorEntry {
            url: Some(URI_MISSING.to_string()),
            status: 404,
        }]
    );
}

#[test]
fn test_mixed_capture_report_json() {
    let records = mixed_capture();
    let file = write_temp_warc(&records.concat());
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.json");

    let report = run_stats(create_test_config(
        file.path().to_path_buf(),
        output.clone(),
        out_dir.path().join("logs"),
    ))
    .expect("run should succeed");
    assert_eq!(report.output_path.as_deref(), Some(output.as_path()));

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "total_records": 3,
            "total_bytes": declared_bytes(&records),
            "errors": [{"url": URI_MISSING, "status": 404}],
            "hosts": {"example.com": 2},
            "http_status_codes": {"200": 1, "404": 1},
            "mime_types": {"text/html": 2},
            "record_types": {"warcinfo": 1, "response": 2}
        })
    );
}

#[test]
fn test_empty_capture() {
    let file = write_temp_warc(b"");
    let stats = collect_statistics(file.path()).expect("empty file is a valid capture");

    assert_eq!(stats.total_records, 0);
    assert_eq!(stats.total_bytes, 0);
    assert!(stats.errors.is_empty());
    assert!(stats.hosts.is_empty());
    assert!(stats.http_status_codes.is_empty());
    assert!(stats.mime_types.is_empty());
    assert!(stats.record_types.is_empty());
}

#[test]
fn test_response_without_http_headers() {
    let dns_block = b"20240101000000\nexample.com. 300 IN A 93.184.216.34\n";
    let records = vec![
        warc_record(
            &[
                ("WARC-Type", "response"),
                ("WARC-Target-URI", "dns:example.com"),
                ("Content-Type", "text/dns"),
            ],
            dns_block,
        ),
        warc_record(
            &[
                ("WARC-Type", "response"),
                ("WARC-Target-URI", "http://example.com/empty"),
                ("Content-Type", "application/http; msgtype=response"),
            ],
            b"",
        ),
    ];
    let file = write_temp_warc(&records.concat());

    let stats = collect_statistics(file.path()).unwrap();
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.record_types["response"], 2);
    assert_eq!(stats.total_bytes, dns_block.len() as u64);
    assert!(stats.hosts.is_empty());
    assert!(stats.http_status_codes.is_empty());
    assert!(stats.mime_types.is_empty());
    assert!(stats.errors.is_empty());
}

#[test]
fn test_output_directory_uses_default_filename() {
    let file = write_temp_warc(&mixed_capture().concat());
    let out_dir = TempDir::new().unwrap();

    let report = run_stats(create_test_config(
        file.path().to_path_buf(),
        out_dir.path().to_path_buf(),
        out_dir.path().join("logs"),
    ))
    .expect("directory destination should not fail");

    let expected = out_dir.path().join("warc_stats.json");
    assert_eq!(report.output_path, Some(expected.clone()));
    let written: Value = serde_json::from_str(&fs::read_to_string(expected).unwrap()).unwrap();
    assert_eq!(written["total_records"], 3);
}

#[test]
fn test_requests_do_not_count_as_hosts() {
    let records = vec![
        http_request_record(URI_OK),
        http_response_record(URI_OK, "HTTP/1.1 200 OK", Some("text/html")),
        http_request_record("http://other.example/"),
    ];
    let file = write_temp_warc(&records.concat());

    let stats = collect_statistics(file.path()).unwrap();
    assert_eq!(stats.record_types["request"], 2);
    assert_eq!(stats.hosts.len(), 1);
    assert_eq!(stats.hosts["example.com"], 1);
    assert!(stats.errors.is_empty());
}

#[test]
fn test_redirect_is_reported_as_error() {
    let records = vec![http_response_record(
        "https://example.com/old",
        "HTTP/1.1 301 Moved Permanently",
        None,
    )];
    let file = write_temp_warc(&records.concat());

    let stats = collect_statistics(file.path()).unwrap();
    assert_eq!(stats.errors.len(), 1);
    assert_eq!(stats.errors[0].status, 301);
    assert!(stats.mime_types.is_empty());
}

#[test]
fn test_invariants_on_larger_capture() {
    let mut records = vec![warcinfo_record()];
    let statuses = ["200 OK", "302 Found", "404 Not Found", "200 OK", "500 Internal Server Error"];
    for (i, status) in statuses.iter().cycle().take(25).enumerate() {
        let uri = format!("http://host{}.example/page/{}", i % 4, i);
        records.push(http_request_record(&uri));
        records.push(http_response_record(
            &uri,
            &format!("HTTP/1.1 {}", status),
            Some("text/html; charset=iso-8859-1"),
        ));
    }
    let file = write_temp_warc(&records.concat());

    let stats = collect_statistics(file.path()).unwrap();
    assert_eq!(stats.total_records, 51);
    assert_eq!(
        stats.total_records,
        stats.record_types.values().sum::<u64>()
    );
    assert_eq!(stats.errors.len() as u64, stats.non_success_responses());
    assert_eq!(stats.http_status_codes[&200], 10);
    assert_eq!(stats.hosts.len(), 4);
    assert_eq!(stats.hosts.values().sum::<u64>(), 25);
    assert_eq!(stats.mime_types["text/html"], 25);
}

#[test]
fn test_http_header_section_larger_than_block_limit() {
    let mut block = b"HTTP/1.1 200 OK\r\nSet-Cookie: session=".to_vec();
    block.extend(std::iter::repeat(b'c').take(70 * 1024));
    block.extend_from_slice(b"\r\nContent-Type: text/html; charset=utf-8\r\n\r\n<html></html>");
    let records = vec![warc_record(
        &[
            ("WARC-Type", "response"),
            ("WARC-Target-URI", URI_OK),
            ("Content-Type", "application/http; msgtype=response"),
        ],
        &block,
    )];
    let file = write_temp_warc(&records.concat());

    let stats = collect_statistics(file.path()).unwrap();
    assert_eq!(stats.total_bytes, block.len() as u64);
    assert_eq!(stats.http_status_codes[&200], 1);
    assert_eq!(stats.mime_types.len(), 1);
    assert_eq!(stats.mime_types["text/html"], 1);
}

#[test]
fn test_gzip_capture_matches_plain() {
    let records = mixed_capture();
    let plain = write_temp_warc(&records.concat());
    let gzipped = write_temp_warc(&gzip_per_record(&records));

    let from_plain = collect_statistics(plain.path()).unwrap();
    let from_gzip = collect_statistics(gzipped.path()).unwrap();
    assert_eq!(from_plain, from_gzip);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let file = write_temp_warc(&mixed_capture().concat());
    let out_dir = TempDir::new().unwrap();
    let first = out_dir.path().join("first.json");
    let second = out_dir.path().join("second.json");

    for output in [&first, &second] {
        run_stats(create_test_config(
            file.path().to_path_buf(),
            output.clone(),
            out_dir.path().join("logs"),
        ))
        .unwrap();
    }

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn test_truncated_capture_fails_without_report() {
    let mut data = mixed_capture().concat();
    data.truncate(data.len() - 30);
    let file = write_temp_warc(&data);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("report.json");

    let err = run_stats(create_test_config(
        file.path().to_path_buf(),
        output.clone(),
        out_dir.path().join("logs"),
    ))
    .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("Failed to read WARC file"), "{}", message);
    assert!(!output.exists(), "no partial report may be written");
}

#[test]
fn test_corrupt_capture_fails() {
    let file = write_temp_warc(b"this is not a WARC file\r\n\r\n");
    let err = collect_statistics(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Unknown WARC version"), "{}", message);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.warc.gz");
    let err = collect_statistics(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to open WARC file"));
}

#[test]
fn test_invalid_config_fails_before_reading() {
    let file = write_temp_warc(&mixed_capture().concat());
    let config = Config {
        file: file.path().to_path_buf(),
        output: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let err = run_stats(config).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));
    // the input must not have been overwritten
    assert_eq!(fs::read(file.path()).unwrap(), mixed_capture().concat());
}

#[test]
fn test_output_path_aliasing_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("crawl.warc");
    fs::write(&input, mixed_capture().concat()).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let err = run_stats(create_test_config(
        input.clone(),
        dir.path().join("sub").join("..").join("crawl.warc"),
        dir.path().join("logs"),
    ))
    .unwrap_err();

    assert!(err.to_string().contains("Configuration validation failed"));
    assert_eq!(fs::read(&input).unwrap(), mixed_capture().concat());
}
