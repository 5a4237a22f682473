//! HTTP surface of the preparation tracker.
//!
//! Handlers turn form and query input into validated drafts, call the
//! services, and answer with plain view models serialized as JSON.

#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;
pub mod vm;

pub use context::AppContext;
pub use error::ApiError;
pub use routes::build_router;
