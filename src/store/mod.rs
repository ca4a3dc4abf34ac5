//! In-memory product store subsystem.
//!
//! # Data Flow
//! ```text
//! seed records (model.rs)
//!     → ProductStore (catalog.rs, Mutex<Vec<Product>>)
//!     → linear-scan reads / in-place mutations from handlers
//!     → discarded at process exit (no persistence)
//! ```
//!
//! # Design Decisions
//! - All operations are O(n) scans; the intended record count is small
//!   and non-durable, so no index is maintained
//! - The store is an explicit value owned by the application state and
//!   injected into handlers; tests build fresh instances for isolation
//! - A std Mutex serializes individual operations; no cross-request
//!   transactionality is provided or claimed

pub mod catalog;
pub mod model;

pub use catalog::ProductStore;
pub use model::{Product, ProductDraft, ProductPatch};
