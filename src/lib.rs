//! HTTP header to document metadata normalization.
//!
//! Turns response/request headers, or an existing metadata object, into an
//! ordered metadata object: transport noise dropped, names canonicalized,
//! multi-valued headers collapsed into arrays.

pub mod config;
pub mod constants;
pub mod metadata;
pub mod observability;

pub use config::schema::MetadataConfig;
pub use metadata::{
    canonicalize, filter_headers, filter_metadata, is_ignored, HeaderFilter, HeaderRecord,
    MetadataError, MetadataObject, Token,
};
