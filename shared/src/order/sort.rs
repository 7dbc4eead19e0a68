//! Order list comparators
//!
//! Three orderings over the same order list: the admin table (pure recency),
//! the user's active view (attention-first) and the user's history tab
//! (completion recency). All sorts are stable, so orders that compare equal
//! keep their server-given relative order.
//!
//! Missing timestamps compare as the Unix epoch, which pushes them to the
//! bottom of every newest-first ordering instead of failing.

use crate::models::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

fn epoch_or(ts: Option<DateTime<Utc>>) -> DateTime<Utc> {
    ts.unwrap_or(DateTime::UNIX_EPOCH)
}

/// Admin table ordering: newest placed order first
pub fn sort_admin_orders(orders: &mut [Order]) {
    orders.sort_by(|a, b| epoch_or(b.created_at).cmp(&epoch_or(a.created_at)));
}

/// User active-orders ordering
///
/// Delivered pairs compare by delivery time, newest first, before anything
/// else. Mixed pairs rank by how much attention the order still needs
/// (Pending first, then Approved, Out for Delivery, Delivered, Rejected),
/// and ties break by most recent status change.
pub fn sort_user_orders(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        if a.status == OrderStatus::Delivered && b.status == OrderStatus::Delivered {
            return epoch_or(b.delivered_at).cmp(&epoch_or(a.delivered_at));
        }
        match a.status.priority().cmp(&b.status.priority()) {
            Ordering::Equal => {
                epoch_or(b.status_updated_at).cmp(&epoch_or(a.status_updated_at))
            }
            other => other,
        }
    });
}

/// Order-history ordering: delivered pairs by delivery time, everything else
/// by last status change, newest first
pub fn sort_order_history(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        if a.status == OrderStatus::Delivered && b.status == OrderStatus::Delivered {
            epoch_or(b.delivered_at).cmp(&epoch_or(a.delivered_at))
        } else {
            epoch_or(b.status_updated_at).cmp(&epoch_or(a.status_updated_at))
        }
    });
}
