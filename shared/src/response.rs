//! API Response types
//!
//! Wire envelopes around the data models. Every list field defaults to empty:
//! a malformed or truncated body decodes as "no data" and renders as an
//! empty state, never as a page-level error.

use crate::models::{AdminUserRow, CartItem, LineItem, Order, Product, UserInfo};
use serde::{Deserialize, Serialize};

/// Envelope of the admin order list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Envelope of the profile endpoint: the user plus their own orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserInfo,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Envelope of the last-update polling endpoints
///
/// The token is opaque: the backend may send a timestamp, a counter, or a
/// string marker. It is normalized to its JSON text and compared by equality
/// only, never ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastUpdateResponse {
    pub last_update: serde_json::Value,
}

impl LastUpdateResponse {
    /// Normalized token text for equality comparison
    pub fn token(&self) -> String {
        match &self.last_update {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Generic `{"message": ...}` body, used by acks and error responses
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Login response: the backend reports the role on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub role: String,
}

/// Envelope of a successful order placement: the items that were checked out
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlaceOrderResponse {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Envelope of the admin user list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<AdminUserRow>,
}

/// Envelope of the cart
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CartResponse {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// Envelope of the wishlist
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WishlistResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Ack for cart add/update/decrease: the resulting line state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUpdateAck {
    pub product_id: String,
    pub qty: u32,
    /// Absent on decrease acks
    #[serde(default)]
    pub stock: Option<u32>,
}

/// Ack for cart removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRemoveAck {
    pub product_id: String,
    #[serde(default)]
    pub removed: bool,
}

/// Ack for wishlist add/remove
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistAck {
    pub product_id: String,
}
