//! Product Catalog HTTP API Library
//!
//! A small JSON API over an in-memory product catalog. Requests flow through
//! a fixed middleware pipeline before reaching a handler:
//!
//! ```text
//! HTTP request
//!     → request ID stamping (x-request-id)
//!     → trace logging (method, path, latency)
//!     → timeout + body size limits
//!     → API key check (API routes only)
//!     → handler (read/mutate the catalog)
//!     → JSON response, or normalized error envelope
//! ```

pub mod config;
pub mod http;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use store::ProductStore;
