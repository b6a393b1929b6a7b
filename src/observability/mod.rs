//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatch and handlers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows into every dispatch log line
//! - Metric macros are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
