//! Order Workflow Module
//!
//! The pure order-domain logic behind both order views:
//! - Workflow: the status transition graph and the selectable-status contract
//! - Sort: the admin, user, and history comparators
//! - Filter: status/category/search filters over the cached list

pub mod filter;
pub mod sort;
pub mod workflow;

// Re-exports
pub use filter::{OrderFilter, active_orders, terminal_orders};
pub use sort::{sort_admin_orders, sort_order_history, sort_user_orders};
pub use workflow::{
    DISPLAY_STATUSES, StatusControl, StatusOption, WorkflowError, can_cancel, check_cancellable,
    check_transition, is_legal_transition, status_control, successors,
};
