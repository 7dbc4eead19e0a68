//! Shared types for the storefront client
//!
//! Common types used across the client crates: data models mirrored from the
//! backend API, request/response envelopes, and the pure order-domain logic
//! (status workflow, sort comparators, list filters).

pub mod catalog;
pub mod models;
pub mod order;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Order workflow re-exports (for convenient access)
pub use order::{StatusControl, StatusOption, WorkflowError};
