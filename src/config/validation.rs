//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (cap >= 1, non-empty structural rules)
//! - Check extra ignored names are valid header names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MetadataConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::MetadataConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("filter.max_multi_values must be at least 1")]
    ZeroMultiValueCap,

    #[error("filter.{0} must not be empty")]
    EmptyField(&'static str),

    #[error("filter.extra_ignored_headers contains invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    #[error("observability.log_format {0:?} is not one of pretty, json")]
    UnknownLogFormat(String),
}

/// Check a configuration, collecting every violation.
pub fn validate_config(config: &MetadataConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let filter = &config.filter;

    if filter.max_multi_values == 0 {
        errors.push(ValidationError::ZeroMultiValueCap);
    }
    if filter.temp_prefix.is_empty() {
        errors.push(ValidationError::EmptyField("temp_prefix"));
    }
    if filter.document_id_field.is_empty() {
        errors.push(ValidationError::EmptyField("document_id_field"));
    }
    for name in &filter.extra_ignored_headers {
        if http::HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidHeaderName(name.clone()));
        }
    }

    let observability = &config.observability;
    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }
    if !LOG_FORMATS.contains(&observability.log_format.as_str()) {
        errors.push(ValidationError::UnknownLogFormat(observability.log_format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&MetadataConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = MetadataConfig::default();
        config.filter.max_multi_values = 0;
        config.filter.temp_prefix.clear();
        config.filter.extra_ignored_headers = vec!["Good-Name".into(), "bad name".into(), "".into()];
        config.observability.log_level = "verbose".into();
        config.observability.log_format = "xml".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroMultiValueCap,
                ValidationError::EmptyField("temp_prefix"),
                ValidationError::InvalidHeaderName("bad name".into()),
                ValidationError::InvalidHeaderName("".into()),
                ValidationError::UnknownLogLevel("verbose".into()),
                ValidationError::UnknownLogFormat("xml".into()),
            ]
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = MetadataConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
