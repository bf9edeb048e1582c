//! Header value coercion.
//!
//! The first character decides the token kind:
//! - `{` must parse as an object
//! - `[` must parse as an array
//! - anything else is a JSON literal if it parses as one, otherwise a string
//!
//! Date-like values are left as strings.

use serde_json::Value;

use crate::metadata::types::{MetadataError, MetadataResult, Token, ValueShape};
use crate::observability::metrics;

/// Coerce a raw header value into a token.
///
/// `header` is only used to label the error.
pub fn coerce(header: &str, raw: &str) -> MetadataResult<Token> {
    if raw.starts_with('{') {
        return parse_shaped(header, raw, ValueShape::Object);
    }
    if raw.starts_with('[') {
        return parse_shaped(header, raw, ValueShape::Array);
    }

    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

fn parse_shaped(header: &str, raw: &str, expected: ValueShape) -> MetadataResult<Token> {
    serde_json::from_str(raw).map_err(|source| {
        metrics::record_parse_error();
        MetadataError::Parse {
            header: header.to_string(),
            expected,
            source,
        }
    })
}
