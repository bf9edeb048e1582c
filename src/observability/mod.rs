//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! metadata pipeline produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever recorder the host application installs
//! ```

pub mod logging;
pub mod metrics;
