//! Header to metadata normalization subsystem.
//!
//! # Data Flow
//! ```text
//! wire header block / http::HeaderMap
//!     → source.rs (group field lines into HeaderRecords)
//!     → policy.rs (drop ignored names)
//!     → coerce.rs (object | array | scalar token)
//!     → canonical.rs (Title-Case-per-segment key)
//!     → filter.rs (accumulate into ordered MetadataObject)
//!
//! existing MetadataObject
//!     → policy.rs → canonical.rs → filter.rs (values untouched)
//! ```

pub mod canonical;
pub mod coerce;
pub mod filter;
pub mod policy;
pub mod source;
pub mod types;

pub use canonical::canonicalize;
pub use coerce::coerce;
pub use filter::{filter_headers, filter_metadata, HeaderFilter};
pub use policy::{is_ignored, IgnorePolicy, IgnoreReason, IGNORED_HEADERS};
pub use source::{parse_header_block, records_from_header_map};
pub use types::{HeaderRecord, MetadataError, MetadataObject, MetadataResult, Token, ValueShape};
