//! Data models
//!
//! Mirrored from the backend API. All IDs are opaque server-assigned strings;
//! endpoints that spell an id `_id` are handled with serde aliases.

pub mod analytics;
pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use analytics::*;
pub use cart::*;
pub use category::*;
pub use order::*;
pub use product::*;
pub use user::*;
