//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → middleware/cors.rs (OPTIONS short-circuit, CORS headers)
//!     → [routing table resolves the action]
//!     → [handlers run against the store]
//!     → response.rs (envelope)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestUuid, X_REQUEST_ID};
pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
