//! Read-only JSON API for the presentation layer.
//!
//! Routes are nested under `/api/`. `queue_api_router()` returns a plain
//! `Router`, so it can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::queue_api_router;
pub use server::{start_queue_api_server, QueueApiServer};
pub use types::ApiContext;
