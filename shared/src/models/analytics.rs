//! Admin Analytics Models
//!
//! Aggregates computed server-side for the admin dashboard. All values are
//! opaque display data on the client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-wide totals
///
/// Net revenue counts Delivered orders only; gross also includes orders still
/// in flight (Approved, Out for Delivery).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(default)]
    pub orders: u32,
    #[serde(default)]
    pub users: u32,
    #[serde(default)]
    pub gross_revenue: f64,
    #[serde(default)]
    pub net_revenue: f64,
    #[serde(default)]
    pub sold_items: u32,
}

/// One day of delivered revenue on the sales-trend chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// Best-selling product by delivered quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub qty: u32,
}

/// Delivered revenue grouped by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}
