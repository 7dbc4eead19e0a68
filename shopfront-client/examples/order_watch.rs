// shopfront-client/examples/order_watch.rs
// Headless order watcher: logs in, prints the current orders, then keeps
// polling and logs every toast the storefront UI would have shown.

use async_trait::async_trait;
use shopfront_client::{ClientConfig, ConfirmDialog, LogNotifier, OrderPoller, ShopApi, UserOrders};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Headless stand-in for the cancel dialog; this watcher never cancels,
/// so the answer does not matter
struct AutoConfirm;

#[async_trait]
impl ConfirmDialog for AutoConfirm {
    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!("  Example: {} user@shop.test secret", args[0]);
        println!("  SHOPFRONT_BASE_URL / SHOPFRONT_POLL_SECS override the defaults");
        return Ok(());
    }

    let email = &args[1];
    let password = &args[2];

    let config = ClientConfig::from_env();
    let api = ShopApi::new(&config);

    let login = match api.login(email, password).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Login failed: {e}");
            return Err(e.into());
        }
    };
    tracing::info!("Logged in with role: {}", login.role);

    let mut orders = UserOrders::new(api, Arc::new(LogNotifier), Arc::new(AutoConfirm));
    orders.refresh().await;

    if let Some(user) = orders.user() {
        tracing::info!("Watching orders for: {}", user.username);
    }
    for order in orders.visible_orders() {
        tracing::info!(
            "  {} [{}] {} item(s), total {:.2}",
            order.display_number(),
            order.status,
            order.total_items,
            order.order_total,
        );
    }

    let controller = Arc::new(Mutex::new(orders));
    let shutdown = CancellationToken::new();
    let poller = OrderPoller::spawn(controller, config.poll_interval, shutdown);

    tracing::info!("Polling every {:?}, Ctrl-C to stop", config.poll_interval);
    tokio::signal::ctrl_c().await?;

    poller.stop();
    poller.join().await;
    Ok(())
}
