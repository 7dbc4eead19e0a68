//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
///
/// Wire names are the human-facing display strings (`"Out for Delivery"`).
/// `Unknown` absorbs statuses this build does not know about; such orders
/// render with every workflow control disabled and sort last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Display string, identical to the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// Kebab-case slug used for badge CSS classes (`out-for-delivery`)
    pub fn slug(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    /// Terminal statuses have no outgoing transitions and render as a badge
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Rejected | OrderStatus::Cancelled
        )
    }

    /// Sort rank for the user-facing order list: active statuses first,
    /// resolved ones after, anything unrecognized last
    pub fn priority(&self) -> u8 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::Approved => 2,
            OrderStatus::OutForDelivery => 3,
            OrderStatus::Delivered => 4,
            OrderStatus::Rejected => 5,
            _ => 99,
        }
    }

    /// Fill percentage of the order progress bar
    pub fn progress_percent(&self) -> u8 {
        match self {
            OrderStatus::Pending => 25,
            OrderStatus::Approved => 50,
            OrderStatus::OutForDelivery => 75,
            OrderStatus::Delivered | OrderStatus::Rejected => 100,
            _ => 0,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line item snapshot captured at order placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    /// Category name snapshot; some endpoints omit it
    #[serde(default)]
    pub category: String,
    pub qty: u32,
    /// Price at purchase; the admin list spells this field `price`
    #[serde(alias = "price")]
    pub price_at_purchase: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LineItem {
    /// Line total at the purchase-time price
    pub fn line_total(&self) -> f64 {
        self.price_at_purchase * self.qty as f64
    }
}

/// Order entity as reported by the backend
///
/// Read-only on the client: status only ever changes server-side, the client
/// reflects what the backend reports. Timestamps may be absent on older
/// records; comparators treat a missing timestamp as the epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Human-facing order number; falls back to `id` for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Set by the backend on every status transition
    #[serde(default)]
    pub status_updated_at: Option<DateTime<Utc>>,
    /// Set only when the order reaches Delivered
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub order_total: f64,
    /// Owner attribution, present in the admin list only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

impl Order {
    /// Human-facing identifier: the order number when assigned, else the id
    pub fn display_number(&self) -> &str {
        self.order_number.as_deref().unwrap_or(&self.id)
    }

    /// Whether any line item belongs to the given category (case-insensitive)
    pub fn matches_category(&self, category: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.category.eq_ignore_ascii_case(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"Out for Delivery\"");

        let status: OrderStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_unrecognized_status_decodes_to_unknown() {
        let status: OrderStatus = serde_json::from_str("\"Refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        assert_eq!(status.priority(), 99);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_status_priority_ranks() {
        assert_eq!(OrderStatus::Pending.priority(), 1);
        assert_eq!(OrderStatus::Approved.priority(), 2);
        assert_eq!(OrderStatus::OutForDelivery.priority(), 3);
        assert_eq!(OrderStatus::Delivered.priority(), 4);
        assert_eq!(OrderStatus::Rejected.priority(), 5);
        assert_eq!(OrderStatus::Cancelled.priority(), 99);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(OrderStatus::Pending.progress_percent(), 25);
        assert_eq!(OrderStatus::Approved.progress_percent(), 50);
        assert_eq!(OrderStatus::OutForDelivery.progress_percent(), 75);
        assert_eq!(OrderStatus::Delivered.progress_percent(), 100);
        assert_eq!(OrderStatus::Rejected.progress_percent(), 100);
        assert_eq!(OrderStatus::Unknown.progress_percent(), 0);
    }

    #[test]
    fn test_line_item_accepts_both_price_spellings() {
        let admin: LineItem =
            serde_json::from_str(r#"{"name":"Lamp","qty":2,"price":499.0}"#).unwrap();
        assert_eq!(admin.price_at_purchase, 499.0);

        let user: LineItem =
            serde_json::from_str(r#"{"name":"Lamp","qty":2,"price_at_purchase":499.0}"#).unwrap();
        assert_eq!(user.price_at_purchase, 499.0);
        assert_eq!(user.line_total(), 998.0);
    }

    #[test]
    fn test_display_number_falls_back_to_id() {
        let json = r#"{"id":"o-1","status":"Pending"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.display_number(), "o-1");
        assert!(order.items.is_empty());

        let json = r#"{"id":"o-1","order_number":"ORD-1001","status":"Pending"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.display_number(), "ORD-1001");
    }

    #[test]
    fn test_matches_category_ignores_case() {
        let order: Order = serde_json::from_str(
            r#"{"id":"o-1","status":"Pending",
                "items":[{"name":"Lamp","category":"Lighting","qty":1,"price":10.0}]}"#,
        )
        .unwrap();
        assert!(order.matches_category("lighting"));
        assert!(!order.matches_category("furniture"));
    }
}
