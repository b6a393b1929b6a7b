//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, decoded path)
//!     → router.rs (route table lookup)
//!     → matcher.rs (segment-by-segment template match)
//!     → Return: Action + params, 405, 400 or NoMatch
//!
//! Route Compilation (at startup):
//!     static templates
//!     → PathPattern (literal / int / text segments)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use matcher::{PathParams, PathPattern};
pub use router::{Action, Resolution, RouteTable};
