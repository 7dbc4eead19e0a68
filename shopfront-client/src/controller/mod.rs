//! Per-view order controllers
//!
//! One controller instance per mounted view, each owning its own canonical
//! order cache and polling cursor. Nothing here is process-global, so two
//! views (or two test instances) never bleed state into each other.

pub mod admin;
pub mod user;

pub use admin::AdminOrders;
pub use user::UserOrders;
