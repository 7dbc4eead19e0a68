//! API Request types
//!
//! Bodies sent by the client. These are shared so a mock backend in tests can
//! decode exactly what the client encodes.

use crate::models::OrderStatus;
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Admin status-update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Add-to-cart request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub qty: u32,
}

/// Cart quantity update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub qty: u32,
}
