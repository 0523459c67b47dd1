//! Backend abstraction: one method per REST operation.
//!
//! Stores depend on this trait rather than on the HTTP client directly,
//! so the whole state layer is testable against an in-memory fake. The
//! production implementation is [`crate::http::HttpBackend`].

use async_trait::async_trait;
use fresh_commerce::prelude::*;
use fresh_data::ApiError;
use serde::{Deserialize, Serialize};

/// Response to a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Session credential to attach to subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload. The backend assigns role `buyer` to every
/// self-service signup; the client never sends a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile update payload. A password change must carry the current
/// password; the view edge validates that pairing before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
}

/// The FreshMart REST API, one method per operation.
///
/// Every method resolves to `Result<_, ApiError>`; implementations never
/// panic and never throw past the async boundary.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Attach (or clear) the session credential used by the transport.
    fn set_credential(&self, token: Option<String>);

    // Auth
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
    async fn register(&self, input: &RegisterInput) -> Result<AuthResponse, ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError>;

    // Products
    async fn fetch_products(&self, filters: &ProductFilters) -> Result<Vec<Product>, ApiError>;
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError>;
    async fn fetch_seller_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError>;
    async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError>;
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
    async fn add_review(&self, id: &ProductId, review: &ReviewInput) -> Result<(), ApiError>;

    // Cart (mutations return the full updated cart)
    async fn fetch_cart(&self) -> Result<CartPayload, ApiError>;
    async fn add_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartPayload, ApiError>;
    async fn update_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartPayload, ApiError>;
    async fn remove_cart_item(&self, product_id: &ProductId) -> Result<(), ApiError>;

    // Orders
    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn fetch_seller_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError>;
    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError>;
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;

    // Admin
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;
    async fn update_user_role(&self, id: &UserId, role: Role) -> Result<User, ApiError>;
    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError>;
}
