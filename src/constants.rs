//! Shared field names and limits used across the metadata pipeline.

/// Reserved document-identity field. Never carried as metadata.
pub const DOCUMENT_ID_FIELD_NAME: &str = "__document_id";

/// Names with this prefix are scratch headers and never carried as metadata.
pub const TEMP_HEADER_PREFIX: &str = "Temp";

/// Upper bound on the number of distinct values kept for a multi-valued header.
pub const MAX_MULTI_VALUES: usize = 15;
