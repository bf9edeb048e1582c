//! Header record sources.
//!
//! # Responsibilities
//! - Convert an `http::HeaderMap` into records
//! - Parse a wire-format header block into records
//!
//! # Design Decisions
//! - One field line carries one element; values are never split on commas,
//!   so HTTP-dates and type names survive intact
//! - Repeated field lines of the same name group into one record, in
//!   first-appearance order, for both sources
//! - Wire casing of names is preserved; the ignore policy is case-sensitive

use http::HeaderMap;
use indexmap::IndexMap;

use crate::metadata::types::{HeaderRecord, MetadataError, MetadataResult};

impl HeaderRecord {
    /// Create a single-element record from a raw header value.
    ///
    /// The value is trimmed; an empty value yields a record with no elements.
    pub fn from_raw(name: impl Into<String>, value: &str) -> Self {
        let mut record = Self::new(name, Vec::<String>::new());
        record.push_raw(value);
        record
    }

    fn push_raw(&mut self, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.push_element(value.to_string());
        }
    }
}

/// One record per distinct name, in first-appearance order.
///
/// `HeaderMap` lowercases names, so pair this with a case-insensitive policy
/// when the built-in ignore set should apply.
pub fn records_from_header_map(headers: &HeaderMap) -> Vec<HeaderRecord> {
    let mut records: IndexMap<&str, HeaderRecord> = IndexMap::new();

    for (name, value) in headers {
        let record = records
            .entry(name.as_str())
            .or_insert_with(|| HeaderRecord::new(name.as_str(), Vec::<String>::new()));

        match value.to_str() {
            Ok(value) => record.push_raw(value),
            Err(_) => {
                tracing::warn!(header = name.as_str(), "Skipping non-ASCII header value");
            }
        }
    }

    records.into_values().collect()
}

/// Parse a wire-format header block into records.
///
/// A leading HTTP status or request line is skipped, continuation lines
/// (leading whitespace) extend the previous value, and a blank line ends
/// the block. Lines repeating a name (exact match) add an element to that
/// name's record.
pub fn parse_header_block(block: &str) -> MetadataResult<Vec<HeaderRecord>> {
    let mut fields: Vec<(String, String)> = Vec::new();

    for (index, line) in block.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if fields.is_empty() && index == 0 {
                continue;
            }
            break;
        }
        if index == 0 && is_start_line(line) {
            continue;
        }

        if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = fields.last_mut() {
                value.push(' ');
                value.push_str(line.trim());
                continue;
            }
        }

        let (name, value) = line
            .split_once(':')
            .map(|(name, value)| (name.trim(), value.trim()))
            .filter(|(name, _)| !name.is_empty() && !name.contains(char::is_whitespace))
            .ok_or_else(|| MetadataError::MalformedHeaderLine {
                line: index + 1,
                content: line.to_string(),
            })?;

        fields.push((name.to_string(), value.to_string()));
    }

    let mut records: IndexMap<String, HeaderRecord> = IndexMap::new();
    for (name, value) in fields {
        records
            .entry(name)
            .or_insert_with_key(|name| HeaderRecord::new(name.as_str(), Vec::<String>::new()))
            .push_raw(&value);
    }

    Ok(records.into_values().collect())
}

fn is_start_line(line: &str) -> bool {
    line.starts_with("HTTP/") || line.split_whitespace().nth(2).is_some_and(|v| v.starts_with("HTTP/"))
}
