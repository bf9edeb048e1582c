//! Ignore policy: which header names never become metadata.
//!
//! # Rules
//! - Names starting with the temp prefix (`Temp`) are dropped
//! - The reserved document-identity field is dropped
//! - Names in the ignore set are dropped (exact, case-sensitive by default)
//!
//! The ignore set is a compatibility contract with the server: anything in
//! it is transport noise and is silently discarded regardless of value.

use std::collections::HashSet;

use crate::config::schema::FilterConfig;
use crate::constants::{DOCUMENT_ID_FIELD_NAME, TEMP_HEADER_PREFIX};
use crate::metadata::filter::HeaderFilter;

/// Header names that never become metadata.
pub const IGNORED_HEADERS: &[&str] = &[
    // Server internal headers
    "Raven-Server-Build",
    "Raven-Client-Version",
    "Non-Authoritative-Information",
    "Raven-Timer-Request",
    "Raven-Authenticated-User",
    "Raven-Last-Modified",
    "Has-Api-Key",
    // CORS
    "Access-Control-Allow-Origin",
    "Access-Control-Max-Age",
    "Access-Control-Allow-Methods",
    "Access-Control-Request-Headers",
    "Access-Control-Allow-Headers",
    // Proxy
    "Reverse-Via",
    "Persistent-Auth",
    "Allow",
    "Content-Disposition",
    "Content-Encoding",
    "Content-Language",
    "Content-Location",
    "Content-MD5",
    "Content-Range",
    "Content-Type",
    "Expires",
    // Tracked separately by the client
    "Last-Modified",
    // Changes with encoding and metadata size
    "Content-Length",
    "Keep-Alive",
    "X-Powered-By",
    "X-AspNet-Version",
    "X-Requested-With",
    "X-SourceFiles",
    // Request headers
    "Accept-Charset",
    "Accept-Encoding",
    "Accept",
    "Accept-Language",
    "Authorization",
    "Cookie",
    "Expect",
    "From",
    "Host",
    "If-Match",
    "If-Modified-Since",
    "If-None-Match",
    "If-Range",
    "If-Unmodified-Since",
    "Max-Forwards",
    "Referer",
    "TE",
    "User-Agent",
    // Response headers
    "Accept-Ranges",
    "Age",
    "ETag",
    "Location",
    "Retry-After",
    "Server",
    "Set-Cookie2",
    "Set-Cookie",
    "Vary",
    "Www-Authenticate",
    // General
    "Cache-Control",
    "Connection",
    "Date",
    "Pragma",
    "Trailer",
    "Transfer-Encoding",
    "Upgrade",
    "Via",
    "Warning",
    // Application Request Routing
    "X-ARR-LOG-ID",
    "X-ARR-SSL",
    "X-Forwarded-For",
    "X-Original-URL",
];

/// Why a header was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    TempPrefix,
    DocumentId,
    Listed,
}

impl IgnoreReason {
    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::TempPrefix => "temp_prefix",
            IgnoreReason::DocumentId => "document_id",
            IgnoreReason::Listed => "listed",
        }
    }
}

/// Immutable set of exclusion rules. Built once, then only read.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    names: HashSet<String>,
    temp_prefix: String,
    document_id_field: String,
    case_insensitive: bool,
}

impl IgnorePolicy {
    /// Build a policy from filter configuration.
    ///
    /// Extra names are added on top of the built-in set, never replacing it.
    pub fn from_config(config: &FilterConfig) -> Self {
        let fold = |name: &str| {
            if config.case_insensitive {
                name.to_ascii_lowercase()
            } else {
                name.to_string()
            }
        };

        let names = IGNORED_HEADERS
            .iter()
            .copied()
            .chain(config.extra_ignored_headers.iter().map(String::as_str))
            .map(fold)
            .collect();

        Self {
            names,
            temp_prefix: config.temp_prefix.clone(),
            document_id_field: config.document_id_field.clone(),
            case_insensitive: config.case_insensitive,
        }
    }

    /// The process-wide policy with built-in rules only.
    ///
    /// Shared with the standard filter; the set is built once per process.
    pub fn standard() -> &'static IgnorePolicy {
        HeaderFilter::standard().policy()
    }

    /// Returns the rule that drops `name`, if any.
    pub fn reason(&self, name: &str) -> Option<IgnoreReason> {
        if name.starts_with(&self.temp_prefix) {
            return Some(IgnoreReason::TempPrefix);
        }
        if name == self.document_id_field {
            return Some(IgnoreReason::DocumentId);
        }

        let listed = if self.case_insensitive {
            self.names.contains(&name.to_ascii_lowercase())
        } else {
            self.names.contains(name)
        };
        listed.then_some(IgnoreReason::Listed)
    }

    /// Returns true if `name` must never appear in metadata.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.reason(name).is_some()
    }
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self {
            names: IGNORED_HEADERS.iter().map(|s| s.to_string()).collect(),
            temp_prefix: TEMP_HEADER_PREFIX.to_string(),
            document_id_field: DOCUMENT_ID_FIELD_NAME.to_string(),
            case_insensitive: false,
        }
    }
}

/// Check a name against the standard policy.
pub fn is_ignored(name: &str) -> bool {
    IgnorePolicy::standard().is_ignored(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_header_ignored() {
        for name in IGNORED_HEADERS {
            assert_eq!(
                IgnorePolicy::standard().reason(name),
                Some(IgnoreReason::Listed),
                "{name} should be ignored"
            );
        }
    }

    #[test]
    fn test_standard_policy_is_the_standard_filters() {
        assert!(std::ptr::eq(
            IgnorePolicy::standard(),
            HeaderFilter::standard().policy()
        ));
    }

    #[test]
    fn test_structural_rules() {
        assert_eq!(
            IgnorePolicy::standard().reason("Temp-Index-Score"),
            Some(IgnoreReason::TempPrefix)
        );
        assert!(is_ignored("Temp"));
        assert!(is_ignored("TempAnything"));
        assert_eq!(
            IgnorePolicy::standard().reason(DOCUMENT_ID_FIELD_NAME),
            Some(IgnoreReason::DocumentId)
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(is_ignored("Content-Type"));
        assert!(!is_ignored("content-type"));
        assert!(!is_ignored("temp-value"));
        assert!(!is_ignored("Etag"));
        assert!(!is_ignored("Raven-Entity-Name"));
    }

    #[test]
    fn test_config_extras_and_case_folding() {
        let config = FilterConfig {
            extra_ignored_headers: vec!["X-Internal-Trace".to_string()],
            case_insensitive: true,
            ..FilterConfig::default()
        };
        let policy = IgnorePolicy::from_config(&config);

        assert!(policy.is_ignored("x-internal-trace"));
        assert!(policy.is_ignored("content-type"));
        assert!(policy.is_ignored("ETAG"));
        assert!(!policy.is_ignored("x-custom"));
    }

    #[test]
    fn test_config_structural_overrides() {
        let config = FilterConfig {
            temp_prefix: "Scratch".to_string(),
            document_id_field: "@id".to_string(),
            ..FilterConfig::default()
        };
        let policy = IgnorePolicy::from_config(&config);

        assert_eq!(policy.reason("Scratch-Pad"), Some(IgnoreReason::TempPrefix));
        assert_eq!(policy.reason("@id"), Some(IgnoreReason::DocumentId));
        assert!(!policy.is_ignored("Temp-Value"));
    }
}
