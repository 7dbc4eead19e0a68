//! Cart Model

use serde::{Deserialize, Serialize};

/// Cart line as reported by the cart endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    /// Discounted price; overrides `price` when present and non-zero
    #[serde(default)]
    pub offer_price: Option<f64>,
    pub qty: u32,
    /// Stock ceiling for quantity controls
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CartItem {
    /// Effective unit price: the offer price wins when set and non-zero
    pub fn unit_price(&self) -> f64 {
        self.offer_price
            .filter(|p| *p > 0.0)
            .unwrap_or(self.price)
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.qty as f64
    }
}

/// Total payable for the cart, honoring per-item offer prices
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, offer: Option<f64>, qty: u32) -> CartItem {
        CartItem {
            product_id: "p-1".to_string(),
            name: "Lamp".to_string(),
            price,
            offer_price: offer,
            qty,
            stock: None,
            image_url: None,
        }
    }

    #[test]
    fn test_offer_price_wins() {
        assert_eq!(item(100.0, Some(80.0), 1).unit_price(), 80.0);
        assert_eq!(item(100.0, None, 1).unit_price(), 100.0);
    }

    #[test]
    fn test_zero_offer_price_falls_back() {
        assert_eq!(item(100.0, Some(0.0), 1).unit_price(), 100.0);
    }

    #[test]
    fn test_cart_total() {
        let items = vec![item(100.0, Some(80.0), 2), item(50.0, None, 3)];
        assert_eq!(cart_total(&items), 80.0 * 2.0 + 50.0 * 3.0);
    }
}
