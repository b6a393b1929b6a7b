//! Vendor Service Library
//!
//! CRUD over vendors and the materials they supply, plus a cross-vendor
//! price comparison, served as JSON over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pricing;
pub mod routing;
pub mod store;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use http::HttpServer;
pub use store::{MemoryStore, MySqlStore, VendorStore};
