//! Header filtering into metadata objects.
//!
//! # Responsibilities
//! - Drop headers the ignore policy flags
//! - Collapse multi-valued headers into capped arrays (array form)
//! - Re-key values under canonical names
//!
//! # Design Decisions
//! - Array form coerces values; map form never touches them
//! - One malformed value fails the whole call, no partial metadata
//! - Distinct values keep first-seen order, so the cap is deterministic

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::schema::FilterConfig;
use crate::constants::MAX_MULTI_VALUES;
use crate::metadata::canonical::canonicalize;
use crate::metadata::coerce::coerce;
use crate::metadata::policy::IgnorePolicy;
use crate::metadata::types::{HeaderRecord, MetadataObject, MetadataResult};
use crate::observability::metrics;

static STANDARD: Lazy<HeaderFilter> = Lazy::new(HeaderFilter::default);

/// Turns header collections into metadata objects.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct HeaderFilter {
    policy: IgnorePolicy,
    max_values: usize,
}

impl HeaderFilter {
    /// Create a filter from a policy and a multi-value cap.
    pub fn new(policy: IgnorePolicy, max_values: usize) -> Self {
        Self { policy, max_values }
    }

    /// Build a filter from configuration.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(IgnorePolicy::from_config(config), config.max_multi_values)
    }

    /// The process-wide filter with built-in rules.
    pub fn standard() -> &'static HeaderFilter {
        &STANDARD
    }

    /// The ignore policy this filter applies.
    pub fn policy(&self) -> &IgnorePolicy {
        &self.policy
    }

    /// Filter protocol header records into a fresh metadata object.
    pub fn filter_headers(&self, headers: &[HeaderRecord]) -> MetadataResult<MetadataObject> {
        let mut metadata = MetadataObject::new();

        for header in headers {
            if self.skip(header.name()) {
                continue;
            }

            let values: IndexSet<&str> = header.elements().iter().map(String::as_str).collect();
            let name = canonicalize(header.name());

            let token = match values.len() {
                0 => continue,
                1 => coerce(header.name(), values[0])?,
                _ => {
                    let tokens = values
                        .iter()
                        .map(|value| coerce(header.name(), value))
                        .collect::<MetadataResult<Vec<_>>>()?;
                    Value::Array(tokens.into_iter().take(self.max_values).collect())
                }
            };

            metadata.insert(name, token);
        }

        self.log_summary(headers.len(), &metadata);
        Ok(metadata)
    }

    /// Re-filter an existing metadata object. `None` passes through.
    pub fn filter_metadata(&self, input: Option<&MetadataObject>) -> Option<MetadataObject> {
        let input = input?;
        let mut metadata = MetadataObject::new();

        for (key, value) in input {
            if self.skip(key) {
                continue;
            }
            metadata.insert(canonicalize(key), value.clone());
        }

        self.log_summary(input.len(), &metadata);
        Some(metadata)
    }

    fn skip(&self, name: &str) -> bool {
        match self.policy.reason(name) {
            Some(reason) => {
                tracing::trace!(header = name, reason = reason.as_str(), "Ignoring header");
                metrics::record_ignored(reason.as_str());
                true
            }
            None => false,
        }
    }

    fn log_summary(&self, seen: usize, metadata: &MetadataObject) {
        metrics::record_emitted(metadata.len());
        tracing::debug!(seen, emitted = metadata.len(), "Filtered headers into metadata");
    }
}

impl Default for HeaderFilter {
    fn default() -> Self {
        Self::new(IgnorePolicy::default(), MAX_MULTI_VALUES)
    }
}

/// Filter header records with the standard filter.
pub fn filter_headers(headers: &[HeaderRecord]) -> MetadataResult<MetadataObject> {
    HeaderFilter::standard().filter_headers(headers)
}

/// Re-filter a metadata object with the standard filter.
pub fn filter_metadata(input: Option<&MetadataObject>) -> Option<MetadataObject> {
    HeaderFilter::standard().filter_metadata(input)
}
