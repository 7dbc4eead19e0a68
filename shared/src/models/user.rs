//! User Model

use serde::{Deserialize, Serialize};

/// Authenticated user information from the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// String ID; the backend spells this `_id`
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub role: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// User row in the admin user table, with the per-user order count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserRow {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub order_count: u32,
}
