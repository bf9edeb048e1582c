//! Metrics collection.
//!
//! # Metrics
//! - `metadata_headers_ignored_total` (counter): dropped headers by reason
//! - `metadata_headers_emitted_total` (counter): keys written to metadata
//! - `metadata_parse_errors_total` (counter): malformed object/array values
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs the exporter
//! - Without a recorder every update is a no-op

pub const HEADERS_IGNORED: &str = "metadata_headers_ignored_total";
pub const HEADERS_EMITTED: &str = "metadata_headers_emitted_total";
pub const PARSE_ERRORS: &str = "metadata_parse_errors_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    ::metrics::describe_counter!(HEADERS_IGNORED, "Headers dropped by the ignore policy");
    ::metrics::describe_counter!(HEADERS_EMITTED, "Metadata keys produced by filtering");
    ::metrics::describe_counter!(PARSE_ERRORS, "Header values that failed to parse");
}

pub fn record_ignored(reason: &'static str) {
    ::metrics::counter!(HEADERS_IGNORED, "reason" => reason).increment(1);
}

pub fn record_emitted(count: usize) {
    ::metrics::counter!(HEADERS_EMITTED).increment(count as u64);
}

pub fn record_parse_error() {
    ::metrics::counter!(PARSE_ERRORS).increment(1);
}
