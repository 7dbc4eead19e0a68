//! Admin order view controller
//!
//! Owns the admin side of the order workflow: the canonical order cache, the
//! status/category filter, the status-update flow and the new-order polling
//! with its badge bookkeeping.
//!
//! Error policy: list fetches and poll ticks fail silent (debug log only, the
//! next tick retries by schedule); mutating calls surface exactly one toast
//! and are never retried.

use crate::ShopApi;
use crate::notify::{BadgeSink, Notifier, ToastKind};
use crate::poll::Pollable;
use async_trait::async_trait;
use shared::models::{CategoryWithCount, Order, OrderStatus};
use shared::order::{
    OrderFilter, StatusControl, WorkflowError, check_transition, sort_admin_orders, status_control,
};
use std::sync::Arc;

/// Controller of the admin orders tab
pub struct AdminOrders {
    api: ShopApi,
    notifier: Arc<dyn Notifier>,
    badge: Arc<dyn BadgeSink>,
    /// Canonical cache, admin-sorted; replaced wholesale, never patched
    orders: Vec<Order>,
    filter: OrderFilter,
    /// Polling cursor; `None` until the first token observation
    last_update: Option<String>,
    /// Order count at the last accepted list, for new-order deltas
    known_count: Option<usize>,
    /// New orders seen while the tab was hidden
    pending_new_orders: u32,
    orders_tab_visible: bool,
    /// Bumped per list fetch; stale responses are discarded
    fetch_seq: u64,
}

impl AdminOrders {
    pub fn new(api: ShopApi, notifier: Arc<dyn Notifier>, badge: Arc<dyn BadgeSink>) -> Self {
        Self {
            api,
            notifier,
            badge,
            orders: Vec::new(),
            filter: OrderFilter::default(),
            last_update: None,
            known_count: None,
            pending_new_orders: 0,
            // the orders tab is the admin landing view
            orders_tab_visible: true,
            fetch_seq: 0,
        }
    }

    /// Fetch the authoritative list and replace the cache wholesale
    pub async fn refresh(&mut self) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;

        match self.api.all_orders().await {
            Ok(orders) => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, "stale order list discarded");
                    return;
                }
                self.adopt(orders);
            }
            Err(e) => tracing::debug!("order list refresh failed: {e}"),
        }
    }

    fn adopt(&mut self, mut orders: Vec<Order>) {
        sort_admin_orders(&mut orders);
        self.known_count = Some(orders.len());
        self.orders = orders;
    }

    // ========== Display ==========

    /// Replace the active filter; reads re-derive from the canonical cache
    pub fn set_filter(&mut self, filter: OrderFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    /// Currently visible rows: the active filter applied to the full cache
    pub fn visible_orders(&self) -> Vec<Order> {
        self.filter.apply(&self.orders)
    }

    /// Count for the "Order(s) Found" label, tracking the visible list
    pub fn order_count(&self) -> usize {
        self.visible_orders().len()
    }

    /// Selector or badge state for one order row
    pub fn status_control(&self, order: &Order) -> StatusControl {
        status_control(order)
    }

    /// New orders not yet shown, for the tab badge
    pub fn pending_new_orders(&self) -> u32 {
        self.pending_new_orders
    }

    /// Options for the category filter dropdown; empty on fetch failure
    pub async fn category_options(&self) -> Vec<CategoryWithCount> {
        match self.api.categories_with_count().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::debug!("category options fetch failed: {e}");
                Vec::new()
            }
        }
    }

    // ========== Mutations ==========

    /// Move an order to a new status
    ///
    /// Illegal moves are rejected locally before any request is sent. After a
    /// successful update the authoritative list is refetched before control
    /// returns, so the next `visible_orders` read applies the active filter
    /// to post-update data.
    pub async fn update_status(&mut self, order_id: &str, new_status: OrderStatus) {
        let current = match self.orders.iter().find(|o| o.id == order_id) {
            Some(order) => order.status,
            None => {
                let e = WorkflowError::UnknownOrder(order_id.to_string());
                self.notifier.show(&e.to_string(), ToastKind::Error);
                return;
            }
        };

        if let Err(e) = check_transition(current, new_status) {
            self.notifier.show(&e.to_string(), ToastKind::Error);
            return;
        }

        match self.api.update_order_status(order_id, new_status).await {
            Ok(()) => {
                tracing::debug!(order_id, status = %new_status, "order status updated");
                self.refresh().await;
            }
            Err(e) => self.notifier.show(&e.to_string(), ToastKind::Error),
        }
    }

    // ========== Polling ==========

    /// One poll tick of the admin change token
    ///
    /// First observation stores the baseline and exits. On a changed token
    /// the list is fetched and its length compared against the last known
    /// count; a positive delta becomes either an immediate reload plus toast
    /// (tab visible) or a badge increment (tab hidden). The known count is
    /// updated on every accepted fetch.
    pub async fn poll_once(&mut self) {
        let token = match self.api.order_last_update().await {
            Ok(token) => token,
            Err(e) => {
                tracing::debug!("order poll failed: {e}");
                return;
            }
        };

        match self.last_update.as_deref() {
            None => {
                // baseline observation, never a notification
                self.last_update = Some(token);
                return;
            }
            Some(stored) if stored == token => return,
            Some(_) => {}
        }
        self.last_update = Some(token);

        let orders = match self.api.all_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::debug!("poll list fetch failed: {e}");
                return;
            }
        };

        let new_count = orders.len();
        let delta = new_count.saturating_sub(self.known_count.unwrap_or(new_count));

        if delta > 0 {
            self.pending_new_orders += delta as u32;
            tracing::debug!(delta, pending = self.pending_new_orders, "new orders detected");

            if self.orders_tab_visible {
                self.adopt(orders);
                let message = if delta == 1 {
                    "New Order Received".to_string()
                } else {
                    format!("{delta} New Orders Received")
                };
                self.notifier.show(&message, ToastKind::Success);
                self.pending_new_orders = 0;
                self.badge.hide();
                return;
            }

            // hidden tab: keep the stale cache on screen, surface the badge
            self.badge.set_count(self.pending_new_orders);
        }

        self.known_count = Some(new_count);
    }

    /// Track the orders tab visibility
    ///
    /// Becoming visible reloads the list, flushes the pending counter and
    /// hides the badge.
    pub async fn set_orders_tab_visible(&mut self, visible: bool) {
        self.orders_tab_visible = visible;
        if visible {
            self.refresh().await;
            self.pending_new_orders = 0;
            self.badge.hide();
        }
    }

    pub fn orders_tab_visible(&self) -> bool {
        self.orders_tab_visible
    }
}

#[async_trait]
impl Pollable for AdminOrders {
    async fn poll_once(&mut self) {
        AdminOrders::poll_once(self).await;
    }
}
