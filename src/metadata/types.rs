//! Metadata types and error definitions.

use serde_json::{Map, Value};
use thiserror::Error;

/// A parsed metadata value: object, array, or scalar.
pub type Token = Value;

/// Ordered mapping from canonical field name to token.
pub type MetadataObject = Map<String, Value>;

/// A header as observed on the wire: a name plus its element values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    name: String,
    elements: Vec<String>,
}

impl HeaderRecord {
    /// Create a record from a name and its element values.
    pub fn new<I, S>(name: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Header name, in the casing it was received with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element values in wire order. May contain duplicates.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub(crate) fn push_element(&mut self, element: String) {
        self.elements.push(element);
    }
}

/// Shape a header value was expected to have when parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Object,
    Array,
}

impl std::fmt::Display for ValueShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueShape::Object => write!(f, "object"),
            ValueShape::Array => write!(f, "array"),
        }
    }
}

/// Errors that can occur while building metadata from headers.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A value that looked like an embedded object or array did not parse.
    #[error("Header {header} has a malformed {expected} value: {source}")]
    Parse {
        header: String,
        expected: ValueShape,
        #[source]
        source: serde_json::Error,
    },

    /// A line of a raw header block is not a `Name: value` pair.
    #[error("Malformed header line {line}: {content:?}")]
    MalformedHeaderLine { line: usize, content: String },
}

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = HeaderRecord::new("X-Tag", ["a", "b", "a"]);
        assert_eq!(record.name(), "X-Tag");
        assert_eq!(record.elements(), &["a", "b", "a"]);
    }

    #[test]
    fn test_error_display() {
        let source = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err = MetadataError::Parse {
            header: "X-Doc".to_string(),
            expected: ValueShape::Object,
            source,
        };
        assert!(err.to_string().starts_with("Header X-Doc has a malformed object value"));

        let err = MetadataError::MalformedHeaderLine {
            line: 3,
            content: "garbage".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed header line 3: \"garbage\"");
    }
}
