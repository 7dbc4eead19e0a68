//! Order status workflow
//!
//! The directed graph of legal status transitions and the contract that turns
//! it into UI state: which statuses the admin selector offers, which are
//! enabled, and when the control collapses to a read-only badge.
//!
//! The table is advisory. The client never advances a status locally; it only
//! disables controls for moves it considers illegal, and the backend
//! re-validates every update.

use crate::models::{Order, OrderStatus};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Fixed display list of the admin status selector, in rendering order
pub const DISPLAY_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Approved,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
    OrderStatus::Rejected,
];

/// Adjacency table of legal forward transitions
///
/// ```text
/// Pending          -> Approved | Rejected
/// Approved         -> Out for Delivery | Rejected
/// Out for Delivery -> Delivered
/// Delivered        -> (terminal)
/// Rejected         -> (terminal)
/// ```
///
/// Cancelled is reachable only through user cancellation, never through the
/// admin selector, so it does not appear here.
static STATUS_FLOW: LazyLock<HashMap<OrderStatus, &'static [OrderStatus]>> = LazyLock::new(|| {
    let flow: HashMap<OrderStatus, &'static [OrderStatus]> = HashMap::from([
        (
            OrderStatus::Pending,
            &[OrderStatus::Approved, OrderStatus::Rejected][..],
        ),
        (
            OrderStatus::Approved,
            &[OrderStatus::OutForDelivery, OrderStatus::Rejected][..],
        ),
        (OrderStatus::OutForDelivery, &[OrderStatus::Delivered][..]),
        (OrderStatus::Delivered, &[][..]),
        (OrderStatus::Rejected, &[][..]),
    ]);
    validate_flow(&flow);
    flow
});

/// Sanity-check the transition table on first use
///
/// Every state in the display list must have an entry, every successor must
/// itself be a display status, and terminal states must map to empty sets.
fn validate_flow(flow: &HashMap<OrderStatus, &'static [OrderStatus]>) {
    for status in DISPLAY_STATUSES {
        let successors = flow
            .get(&status)
            .unwrap_or_else(|| panic!("status flow missing entry for {status}"));
        if status.is_terminal() {
            assert!(
                successors.is_empty(),
                "terminal status {status} must have no successors"
            );
        }
        for next in *successors {
            assert!(
                DISPLAY_STATUSES.contains(next),
                "successor {next} of {status} is not a display status"
            );
        }
    }
}

/// Workflow contract violations
///
/// These reject an operation before any request is sent; server-side
/// rejections of the same moves surface as API errors instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Cannot change status from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order cannot be cancelled from status {status}")]
    NotCancellable { status: OrderStatus },

    #[error("Unknown order: {0}")]
    UnknownOrder(String),
}

/// Legal next statuses for `status`; empty for terminal and unknown statuses
pub fn successors(status: OrderStatus) -> &'static [OrderStatus] {
    STATUS_FLOW.get(&status).copied().unwrap_or(&[])
}

/// Whether `from -> to` is a legal forward transition
pub fn is_legal_transition(from: OrderStatus, to: OrderStatus) -> bool {
    successors(from).contains(&to)
}

/// Validate a forward transition, for the pre-send check on status updates
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), WorkflowError> {
    if is_legal_transition(from, to) {
        Ok(())
    } else {
        Err(WorkflowError::IllegalTransition { from, to })
    }
}

/// Whether the user may still cancel an order in this status
pub fn can_cancel(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Pending | OrderStatus::Approved)
}

/// Validate user cancellation, for the pre-send check on cancel requests
pub fn check_cancellable(status: OrderStatus) -> Result<(), WorkflowError> {
    if can_cancel(status) {
        Ok(())
    } else {
        Err(WorkflowError::NotCancellable { status })
    }
}

/// One entry of the admin status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub status: OrderStatus,
    pub enabled: bool,
}

/// UI state of the status control for one order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusControl {
    /// Terminal order: a fixed badge, never editable
    Badge(OrderStatus),
    /// Active order: the full display list, with only the current status and
    /// its direct successors enabled
    Select {
        current: OrderStatus,
        options: Vec<StatusOption>,
    },
}

impl StatusControl {
    pub fn is_badge(&self) -> bool {
        matches!(self, StatusControl::Badge(_))
    }

    /// Statuses currently selectable; empty for a badge
    pub fn enabled_statuses(&self) -> Vec<OrderStatus> {
        match self {
            StatusControl::Badge(_) => Vec::new(),
            StatusControl::Select { options, .. } => options
                .iter()
                .filter(|option| option.enabled)
                .map(|option| option.status)
                .collect(),
        }
    }
}

/// Compute the status control for an order
///
/// Terminal orders get a read-only badge. Everything else gets a selector
/// over [`DISPLAY_STATUSES`] where an entry is enabled iff it is the current
/// status (the shown value stays selectable) or a direct successor. An order
/// with an unrecognized status gets a selector with every entry disabled.
pub fn status_control(order: &Order) -> StatusControl {
    if order.status.is_terminal() {
        return StatusControl::Badge(order.status);
    }

    let options = DISPLAY_STATUSES
        .iter()
        .map(|&status| StatusOption {
            status,
            enabled: status == order.status || is_legal_transition(order.status, status),
        })
        .collect();

    StatusControl::Select {
        current: order.status,
        options,
    }
}
