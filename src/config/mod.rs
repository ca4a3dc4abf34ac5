//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, API_KEY)
//!     → loader.rs (read & coerce)
//!     → AppConfig (immutable once loaded)
//!     → shared via Arc with the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an empty environment still boots
//! - A missing API key is a startup warning, not a startup failure:
//!   the server runs but rejects every API request

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::AppConfig;
pub use schema::AuthConfig;
pub use schema::LimitConfig;
pub use schema::ListenerConfig;
