//! Typed endpoint surface of the storefront backend

use crate::{ClientConfig, ClientResult, HttpClient};
use shared::models::{
    AdminUserRow, CartItem, Category, CategoryPayload, CategoryRevenue, CategoryWithCount, Order,
    OrderStatus, Product, SalesPoint, SalesSummary, TopProduct,
};
use shared::request::{
    AddToCartRequest, LoginRequest, SignupRequest, UpdateCartRequest, UpdateStatusRequest,
};
use shared::response::{
    CartRemoveAck, CartResponse, CartUpdateAck, LastUpdateResponse, LoginResponse,
    MessageResponse, OrdersResponse, PlaceOrderResponse, ProfileResponse, UsersResponse,
    WishlistAck, WishlistResponse,
};

/// Typed client for the storefront REST API
///
/// Thin request/decode layer: one method per backend route, no caching and no
/// domain decisions. Controllers sit on top of this.
#[derive(Debug, Clone)]
pub struct ShopApi {
    http: HttpClient,
}

impl ShopApi {
    /// Create an API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Access the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========== Session ==========

    /// Login with email and password; the session cookie lands in the jar
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post("/api/users/login", &request).await
    }

    /// Register a new account
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<MessageResponse> {
        let request = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post("/api/users/signup", &request).await
    }

    /// End the session
    pub async fn logout(&self) -> ClientResult<MessageResponse> {
        self.http.post_empty("/api/users/logout").await
    }

    /// Current user plus their own orders
    pub async fn profile(&self) -> ClientResult<ProfileResponse> {
        self.http.get("/api/users/profile").await
    }

    /// Admin user table
    pub async fn admin_users(&self) -> ClientResult<Vec<AdminUserRow>> {
        let response: UsersResponse = self.http.get("/api/users/admin/users").await?;
        Ok(response.users)
    }

    // ========== Orders ==========

    /// Full order list (admin)
    pub async fn all_orders(&self) -> ClientResult<Vec<Order>> {
        let response: OrdersResponse = self.http.get("/api/orders/all").await?;
        Ok(response.orders)
    }

    /// Move an order to a new status (admin)
    ///
    /// The backend echoes the updated order; callers refetch the full list
    /// instead of patching the cache, so the body is discarded.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        let request = UpdateStatusRequest { status };
        self.http
            .put::<serde_json::Value, _>(&format!("/api/orders/update-status/{order_id}"), &request)
            .await?;
        Ok(())
    }

    /// Cancel one of the user's own orders
    pub async fn cancel_order(&self, order_id: &str) -> ClientResult<MessageResponse> {
        self.http
            .put_empty(&format!("/api/orders/cancel/{order_id}"))
            .await
    }

    /// Check the cart out into an order
    pub async fn place_order(&self) -> ClientResult<PlaceOrderResponse> {
        self.http.post_empty("/api/orders/place").await
    }

    /// Admin change token
    pub async fn order_last_update(&self) -> ClientResult<String> {
        let response: LastUpdateResponse = self.http.get("/api/orders/last-update").await?;
        Ok(response.token())
    }

    /// Per-user change token
    pub async fn user_last_update(&self) -> ClientResult<String> {
        let response: LastUpdateResponse = self.http.get("/api/orders/user-last-update").await?;
        Ok(response.token())
    }

    // ========== Catalog ==========

    /// Full product list
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/api/products/").await
    }

    /// Category list
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("/api/categories/").await
    }

    /// Categories with their product counts, for filter dropdowns
    pub async fn categories_with_count(&self) -> ClientResult<Vec<CategoryWithCount>> {
        self.http.get("/api/categories/with-count").await
    }

    /// Create a category (admin)
    pub async fn add_category(&self, payload: &CategoryPayload) -> ClientResult<MessageResponse> {
        self.http.post("/api/categories/add", payload).await
    }

    /// Update a category (admin)
    pub async fn update_category(
        &self,
        category_id: &str,
        payload: &CategoryPayload,
    ) -> ClientResult<MessageResponse> {
        self.http
            .put(&format!("/api/categories/update/{category_id}"), payload)
            .await
    }

    /// Delete a category (admin)
    pub async fn delete_category(&self, category_id: &str) -> ClientResult<MessageResponse> {
        self.http
            .delete(&format!("/api/categories/delete/{category_id}"))
            .await
    }

    // ========== Cart ==========

    /// Current cart contents
    pub async fn cart(&self) -> ClientResult<Vec<CartItem>> {
        let response: CartResponse = self.http.get("/api/cart/").await?;
        Ok(response.items)
    }

    /// Add a product to the cart
    pub async fn add_to_cart(&self, product_id: &str, qty: u32) -> ClientResult<MessageResponse> {
        let request = AddToCartRequest {
            product_id: product_id.to_string(),
            qty,
        };
        self.http.post("/api/cart/add", &request).await
    }

    /// Set the quantity of a cart line
    pub async fn update_cart_qty(&self, product_id: &str, qty: u32) -> ClientResult<CartUpdateAck> {
        let request = UpdateCartRequest {
            product_id: product_id.to_string(),
            qty,
        };
        self.http.put("/api/cart/update", &request).await
    }

    /// Decrease a cart line by one
    pub async fn decrease_cart_qty(&self, product_id: &str) -> ClientResult<CartUpdateAck> {
        self.http
            .put_empty(&format!("/api/cart/decrease/{product_id}"))
            .await
    }

    /// Remove a cart line
    pub async fn remove_from_cart(&self, product_id: &str) -> ClientResult<CartRemoveAck> {
        self.http
            .delete(&format!("/api/cart/remove/{product_id}"))
            .await
    }

    // ========== Wishlist ==========

    /// Current wishlist contents
    pub async fn wishlist(&self) -> ClientResult<Vec<Product>> {
        let response: WishlistResponse = self.http.get("/api/users/wishlist").await?;
        Ok(response.products)
    }

    /// Add a product to the wishlist
    pub async fn add_to_wishlist(&self, product_id: &str) -> ClientResult<WishlistAck> {
        self.http
            .post_empty(&format!("/api/users/wishlist/add/{product_id}"))
            .await
    }

    /// Remove a product from the wishlist
    pub async fn remove_from_wishlist(&self, product_id: &str) -> ClientResult<WishlistAck> {
        self.http
            .delete(&format!("/api/users/wishlist/remove/{product_id}"))
            .await
    }

    // ========== Admin analytics ==========

    /// Headline sales figures
    pub async fn sales_summary(&self) -> ClientResult<SalesSummary> {
        self.http.get("/api/admin/summary").await
    }

    /// Revenue per day
    pub async fn sales_trend(&self) -> ClientResult<Vec<SalesPoint>> {
        self.http.get("/api/admin/sales-trend").await
    }

    /// Best sellers by quantity
    pub async fn top_products(&self) -> ClientResult<Vec<TopProduct>> {
        self.http.get("/api/admin/top-products").await
    }

    /// Revenue per category
    pub async fn category_revenue(&self) -> ClientResult<Vec<CategoryRevenue>> {
        self.http.get("/api/admin/category-revenue").await
    }
}
