//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Open store → (optional) create schema → Start listener
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → Stop accepting → Drain requests → Close store → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: a store that cannot be reached at startup is fatal
//! - The store is closed only after the server has drained

pub mod signals;
pub mod startup;

pub use signals::shutdown_signal;
pub use startup::open_store;
