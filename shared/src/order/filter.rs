//! Order list filtering
//!
//! A filter is a value, not a pipeline stage: every application starts from
//! the full cached list, so changing one criterion never compounds with the
//! result of a previous pass.

use crate::models::{Order, OrderStatus};

/// Display filter over a cached order list
///
/// `status` of `None` means "All". The admin view combines `status` and
/// `category`; the user view combines `status` and `search`. Criteria
/// compose with logical AND, and empty criteria always match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub category: Option<String>,
    pub search: String,
}

impl OrderFilter {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether a single order passes every active criterion
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref() {
            if !category.is_empty() && !order.matches_category(category) {
                return false;
            }
        }

        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let id_hit = order.id.to_lowercase().contains(&query);
            let item_hit = order.items.iter().any(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.category.to_lowercase().contains(&query)
            });
            if !id_hit && !item_hit {
                return false;
            }
        }

        true
    }

    /// Filter a cached list into a fresh display list
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders
            .iter()
            .filter(|order| self.matches(order))
            .cloned()
            .collect()
    }
}

/// Orders still shown in the user's active view, everything not cancelled
pub fn active_orders(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.status != OrderStatus::Cancelled)
        .cloned()
        .collect()
}

/// Orders that belong in the history tab, terminal statuses only
pub fn terminal_orders(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.status.is_terminal())
        .cloned()
        .collect()
}
