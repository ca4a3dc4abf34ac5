//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layering)
//!     → middleware/api_key.rs (shared-secret check, /api routes)
//!     → validation.rs (payload shape checks for create/update)
//!     → handlers.rs (store reads/mutations)
//!     → error.rs (operational errors → JSON envelope)
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod validation;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
