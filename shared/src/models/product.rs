//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity from the catalog endpoints
///
/// The products list spells the id `_id`; the wishlist endpoint uses `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category name resolved by the backend; empty when the category is gone
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub price: f64,
    /// Units in stock
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub images: Vec<String>,
    /// Primary image, first of `images`
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
