//! Command surface and dispatch.
//!
//! `cli` turns arguments into an `Invocation`, `router` runs the one action
//! it selects.

pub mod cli;
pub mod models;
pub mod router;

// Re-export main types
pub use models::{Action, Invocation};
pub use router::Router;
