//! User order view controller
//!
//! The customer-facing side: the user's own orders from the profile endpoint,
//! the active/history split, cancellation with its confirmation gate, and the
//! per-user change polling.

use crate::ShopApi;
use crate::notify::{ConfirmDialog, Notifier, ToastKind};
use crate::poll::Pollable;
use async_trait::async_trait;
use shared::models::{Order, OrderStatus, UserInfo};
use shared::order::{
    OrderFilter, WorkflowError, active_orders, check_cancellable, sort_order_history,
    sort_user_orders, terminal_orders,
};
use std::sync::Arc;

/// Controller of the user's my-orders view
pub struct UserOrders {
    api: ShopApi,
    notifier: Arc<dyn Notifier>,
    dialog: Arc<dyn ConfirmDialog>,
    user: Option<UserInfo>,
    /// Canonical cache: the full profile order list, user-sorted, cancelled
    /// orders included (the history tab still needs them)
    orders: Vec<Order>,
    status_filter: Option<OrderStatus>,
    search: String,
    /// Polling cursor; `None` until the first token observation
    last_update: Option<String>,
    /// Bumped per profile fetch; stale responses are discarded
    fetch_seq: u64,
}

impl UserOrders {
    pub fn new(api: ShopApi, notifier: Arc<dyn Notifier>, dialog: Arc<dyn ConfirmDialog>) -> Self {
        Self {
            api,
            notifier,
            dialog,
            user: None,
            orders: Vec::new(),
            status_filter: None,
            search: String::new(),
            last_update: None,
            fetch_seq: 0,
        }
    }

    /// Fetch the profile and replace the cache wholesale
    pub async fn refresh(&mut self) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;

        match self.api.profile().await {
            Ok(profile) => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, "stale profile discarded");
                    return;
                }
                let mut orders = profile.orders;
                sort_user_orders(&mut orders);
                self.user = Some(profile.user);
                self.orders = orders;
            }
            Err(e) => tracing::debug!("profile refresh failed: {e}"),
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    // ========== Display ==========

    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.status_filter = status;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Currently visible rows: cancelled orders dropped, then the status
    /// filter and free-text search applied to the full cache
    pub fn visible_orders(&self) -> Vec<Order> {
        let filter = OrderFilter {
            status: self.status_filter,
            category: None,
            search: self.search.clone(),
        };
        filter.apply(&active_orders(&self.orders))
    }

    /// Count for the "Order(s) Found" label, tracking the visible list
    pub fn order_count(&self) -> usize {
        self.visible_orders().len()
    }

    /// Finished orders for the history tab, completion-recency ordered
    pub fn order_history(&self) -> Vec<Order> {
        let mut history = terminal_orders(&self.orders);
        sort_order_history(&mut history);
        history
    }

    // ========== Cancellation ==========

    /// Cancel an order after user confirmation
    ///
    /// The workflow contract is enforced before anything else: cancelling an
    /// order that is past its cancellation window is an error, not a no-op.
    /// A declined dialog resolves to `Ok` with nothing sent. Backend
    /// rejections surface as a toast, per the mutation error policy.
    pub async fn cancel(&mut self, order_id: &str) -> Result<(), WorkflowError> {
        let order = self
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| WorkflowError::UnknownOrder(order_id.to_string()))?;
        check_cancellable(order.status)?;

        let accepted = self
            .dialog
            .confirm("Cancel Order", "Are you sure you want to cancel this order?")
            .await;
        if !accepted {
            return Ok(());
        }

        match self.api.cancel_order(order_id).await {
            Ok(_) => {
                // the storefront UI styles this toast as an error
                self.notifier
                    .show("Order Cancelled Successfully", ToastKind::Error);
                self.refresh().await;
            }
            Err(e) => self.notifier.show(&e.to_string(), ToastKind::Error),
        }

        Ok(())
    }

    // ========== Polling ==========

    /// One poll tick of the per-user change token
    ///
    /// First observation stores the baseline and exits; a changed token
    /// reloads the list and shows an informational toast. No counting or
    /// badging here, a user has at most their own orders.
    pub async fn poll_once(&mut self) {
        let token = match self.api.user_last_update().await {
            Ok(token) => token,
            Err(e) => {
                tracing::debug!("user order poll failed: {e}");
                return;
            }
        };

        match self.last_update.as_deref() {
            None => {
                self.last_update = Some(token);
                return;
            }
            Some(stored) if stored == token => return,
            Some(_) => {}
        }
        self.last_update = Some(token);

        self.refresh().await;
        self.notifier.show("Order Status Updated", ToastKind::Info);
    }
}

#[async_trait]
impl Pollable for UserOrders {
    async fn poll_once(&mut self) {
        UserOrders::poll_once(self).await;
    }
}
