//! In-process mock storefront backend
//!
//! A small axum server the client runs against in integration tests. State
//! is raw JSON so tests can seed exactly the wire shapes the real backend
//! produces, including the ones the client must tolerate.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::{Value, json};
use shopfront_client::ClientConfig;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const SESSION_COOKIE: &str = "session=mock-session-token";

pub struct BackendState {
    /// Raw order objects served by both the admin list and the profile
    pub orders: Mutex<Vec<Value>>,
    pub last_update: Mutex<Value>,
    pub user_last_update: Mutex<Value>,
    pub user: Mutex<Value>,
    pub products: Mutex<Vec<Value>>,
    pub categories_with_count: Mutex<Vec<Value>>,
    pub cart_items: Mutex<Vec<Value>>,
    /// Recorded update-status calls: (order id, requested status)
    pub status_updates: Mutex<Vec<(String, String)>>,
    /// Recorded cancel calls by order id
    pub cancel_calls: Mutex<Vec<String>>,
    /// Hits on the admin order list
    pub order_fetches: AtomicUsize,
    /// When set, the profile endpoint demands the session cookie
    pub require_session: AtomicBool,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            last_update: Mutex::new(json!("update-0")),
            user_last_update: Mutex::new(json!("update-0")),
            user: Mutex::new(json!({
                "_id": "u-1",
                "username": "testuser",
                "email": "user@shop.test",
                "role": "user",
            })),
            products: Mutex::new(Vec::new()),
            categories_with_count: Mutex::new(Vec::new()),
            cart_items: Mutex::new(Vec::new()),
            status_updates: Mutex::new(Vec::new()),
            cancel_calls: Mutex::new(Vec::new()),
            order_fetches: AtomicUsize::new(0),
            require_session: AtomicBool::new(false),
        }
    }
}

/// The storefront's own transition rules, as the backend enforces them
fn transition_allowed(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        ("Pending", "Approved")
            | ("Pending", "Rejected")
            | ("Approved", "Out for Delivery")
            | ("Approved", "Rejected")
            | ("Out for Delivery", "Delivered")
    )
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
}

fn message(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(json!({ "message": text.into() }))).into_response()
}

// ========== Handlers ==========

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or("");
    let password = body["password"].as_str().unwrap_or("");

    if password != "secret" {
        return message(StatusCode::UNAUTHORIZED, "Invalid Credentials");
    }

    let role = if email.starts_with("admin") { "admin" } else { "user" };
    (
        StatusCode::OK,
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
        Json(json!({ "message": "Login successful", "role": role })),
    )
        .into_response()
}

async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logout successful" }))
}

async fn all_orders(State(state): State<Arc<BackendState>>) -> Json<Value> {
    state.order_fetches.fetch_add(1, Ordering::SeqCst);
    let orders = state.orders.lock().unwrap().clone();
    Json(json!({ "orders": orders }))
}

async fn profile(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if state.require_session.load(Ordering::SeqCst) && !has_session(&headers) {
        return message(StatusCode::UNAUTHORIZED, "Please login to continue");
    }

    let user = state.user.lock().unwrap().clone();
    let orders = state.orders.lock().unwrap().clone();
    Json(json!({ "user": user, "orders": orders })).into_response()
}

async fn update_status(
    State(state): State<Arc<BackendState>>,
    Path(order_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let requested = body["status"].as_str().unwrap_or("").to_string();

    let mut orders = state.orders.lock().unwrap();
    let Some(order) = orders
        .iter_mut()
        .find(|o| o["id"].as_str() == Some(order_id.as_str()))
    else {
        return message(StatusCode::NOT_FOUND, "Order not found");
    };

    let current = order["status"].as_str().unwrap_or("").to_string();
    if matches!(current.as_str(), "Delivered" | "Rejected" | "Cancelled") {
        return message(StatusCode::BAD_REQUEST, "Order status is locked");
    }
    if !transition_allowed(&current, &requested) {
        return message(
            StatusCode::BAD_REQUEST,
            format!("Cannot change status from {current} to {requested}"),
        );
    }

    order["status"] = json!(requested);
    let updated = order.clone();
    drop(orders);

    state
        .status_updates
        .lock()
        .unwrap()
        .push((order_id, requested));
    (StatusCode::OK, Json(updated)).into_response()
}

async fn cancel_order(
    State(state): State<Arc<BackendState>>,
    Path(order_id): Path<String>,
) -> Response {
    let mut orders = state.orders.lock().unwrap();
    let Some(order) = orders
        .iter_mut()
        .find(|o| o["id"].as_str() == Some(order_id.as_str()))
    else {
        return message(StatusCode::NOT_FOUND, "Order not found");
    };

    let current = order["status"].as_str().unwrap_or("");
    if !matches!(current, "Pending" | "Approved") {
        return message(StatusCode::BAD_REQUEST, "Order cannot be cancelled");
    }

    order["status"] = json!("Cancelled");
    drop(orders);

    state.cancel_calls.lock().unwrap().push(order_id);
    message(StatusCode::OK, "Order cancelled successfully")
}

async fn last_update(State(state): State<Arc<BackendState>>) -> Json<Value> {
    let token = state.last_update.lock().unwrap().clone();
    Json(json!({ "last_update": token }))
}

async fn user_last_update(State(state): State<Arc<BackendState>>) -> Json<Value> {
    let token = state.user_last_update.lock().unwrap().clone();
    Json(json!({ "last_update": token }))
}

async fn place_order(State(state): State<Arc<BackendState>>) -> Response {
    let mut cart = state.cart_items.lock().unwrap();
    if cart.is_empty() {
        return message(StatusCode::BAD_REQUEST, "Cart is empty");
    }
    let items: Vec<Value> = cart.drain(..).collect();
    Json(json!({ "message": "Order placed", "items": items })).into_response()
}

async fn products(State(state): State<Arc<BackendState>>) -> Json<Vec<Value>> {
    Json(state.products.lock().unwrap().clone())
}

async fn categories_with_count(State(state): State<Arc<BackendState>>) -> Json<Vec<Value>> {
    Json(state.categories_with_count.lock().unwrap().clone())
}

async fn cart(State(state): State<Arc<BackendState>>) -> Json<Value> {
    let items = state.cart_items.lock().unwrap().clone();
    Json(json!({ "items": items }))
}

async fn wishlist(State(state): State<Arc<BackendState>>) -> Json<Value> {
    let products = state.products.lock().unwrap().clone();
    Json(json!({ "products": products }))
}

async fn sales_summary() -> Json<Value> {
    Json(json!({
        "orders": 12,
        "users": 4,
        "gross_revenue": 1840.5,
        "net_revenue": 1210.0,
        "sold_items": 31,
    }))
}

// ========== Server handle ==========

pub struct MockBackend {
    pub state: Arc<BackendState>,
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    /// Bind an ephemeral port and serve the mock API
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());

        let router = Router::new()
            .route("/api/users/login", post(login))
            .route("/api/users/logout", post(logout))
            .route("/api/users/profile", get(profile))
            .route("/api/users/wishlist", get(wishlist))
            .route("/api/orders/all", get(all_orders))
            .route("/api/orders/update-status/{order_id}", put(update_status))
            .route("/api/orders/cancel/{order_id}", put(cancel_order))
            .route("/api/orders/place", post(place_order))
            .route("/api/orders/last-update", get(last_update))
            .route("/api/orders/user-last-update", get(user_last_update))
            .route("/api/products/", get(products))
            .route("/api/categories/with-count", get(categories_with_count))
            .route("/api/cart/", get(cart))
            .route("/api/admin/summary", get(sales_summary))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url)
    }

    // ========== Seeding ==========

    pub fn seed_order(&self, order: Value) {
        self.state.orders.lock().unwrap().push(order);
    }

    pub fn seed_product(&self, product: Value) {
        self.state.products.lock().unwrap().push(product);
    }

    pub fn seed_category(&self, category: Value) {
        self.state.categories_with_count.lock().unwrap().push(category);
    }

    pub fn seed_cart_item(&self, item: Value) {
        self.state.cart_items.lock().unwrap().push(item);
    }

    pub fn set_admin_token(&self, token: Value) {
        *self.state.last_update.lock().unwrap() = token;
    }

    pub fn set_user_token(&self, token: Value) {
        *self.state.user_last_update.lock().unwrap() = token;
    }

    pub fn require_session(&self) {
        self.state.require_session.store(true, Ordering::SeqCst);
    }

    // ========== Assertions ==========

    pub fn order_fetches(&self) -> usize {
        self.state.order_fetches.load(Ordering::SeqCst)
    }

    pub fn status_updates(&self) -> Vec<(String, String)> {
        self.state.status_updates.lock().unwrap().clone()
    }

    pub fn cancel_calls(&self) -> Vec<String> {
        self.state.cancel_calls.lock().unwrap().clone()
    }

    pub fn order_status(&self, order_id: &str) -> Option<String> {
        self.state
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o["id"].as_str() == Some(order_id))
            .and_then(|o| o["status"].as_str().map(str::to_string))
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
