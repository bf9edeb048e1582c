//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DOCUMENT_ID_FIELD_NAME, MAX_MULTI_VALUES, TEMP_HEADER_PREFIX};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MetadataConfig {
    /// Header filtering rules.
    pub filter: FilterConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Header filtering configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Maximum distinct values kept for a multi-valued header.
    pub max_multi_values: usize,

    /// Header names dropped in addition to the built-in set.
    pub extra_ignored_headers: Vec<String>,

    /// Names starting with this prefix are dropped.
    pub temp_prefix: String,

    /// Reserved document-identity field, always dropped.
    pub document_id_field: String,

    /// Match the ignore set ASCII case-insensitively.
    pub case_insensitive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_multi_values: MAX_MULTI_VALUES,
            extra_ignored_headers: Vec::new(),
            temp_prefix: TEMP_HEADER_PREFIX.to_string(),
            document_id_field: DOCUMENT_ID_FIELD_NAME.to_string(),
            case_insensitive: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format (pretty, json).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: MetadataConfig = toml::from_str("").unwrap();
        assert_eq!(config, MetadataConfig::default());
        assert_eq!(config.filter.max_multi_values, 15);
        assert_eq!(config.filter.temp_prefix, "Temp");
        assert_eq!(config.filter.document_id_field, "__document_id");
    }

    #[test]
    fn test_partial_config() {
        let config: MetadataConfig = toml::from_str(
            r#"
            [filter]
            extra_ignored_headers = ["X-Internal"]
            case_insensitive = true

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.filter.extra_ignored_headers, vec!["X-Internal"]);
        assert!(config.filter.case_insensitive);
        assert_eq!(config.filter.max_multi_values, 15);
        assert_eq!(config.observability.log_format, "json");
        assert_eq!(config.observability.log_level, "info");
    }
}
