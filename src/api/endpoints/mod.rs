//! API endpoint handlers.
//!
//! Handlers are thin: parse input, hand off to `crate::queue`, wrap the
//! result in JSON.

pub mod health;
pub mod queue;
pub mod specializations;
