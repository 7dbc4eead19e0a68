//! Shopfront Client - typed HTTP client and order controllers for the
//! storefront API
//!
//! Wraps the JSON-over-HTTP storefront backend in a typed API surface and
//! provides the per-view order controllers (admin and user) that own the
//! cached order list, sorting, filtering, polling, and change notification.
//! Rendering is out of scope; controllers expose pure data and talk to the
//! presentation layer through the traits in [`notify`].

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod notify;
pub mod poll;

pub use api::ShopApi;
pub use config::ClientConfig;
pub use controller::{AdminOrders, UserOrders};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use notify::{BadgeSink, ConfirmDialog, LogNotifier, Notifier, ToastKind};
pub use poll::{OrderPoller, Pollable};

// Re-export shared types for convenience
pub use shared::models::{Order, OrderStatus};
pub use shared::order::{OrderFilter, StatusControl, StatusOption, WorkflowError};
