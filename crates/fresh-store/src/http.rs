//! HTTP implementation of [`Backend`] over the `fresh-data` client.

use crate::backend::{AuthResponse, Backend, Credentials, ProfileUpdate, RegisterInput};
use async_trait::async_trait;
use fresh_commerce::prelude::*;
use fresh_data::{endpoints, ApiClient, ApiError, ClientConfig};
use serde_json::json;

/// Production backend speaking to the FreshMart REST API.
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    /// Create a backend over the given client configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    /// Create a backend configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn set_credential(&self, token: Option<String>) {
        self.client.set_token(token);
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.client
            .post(endpoints::auth::LOGIN)
            .json(credentials)?
            .send_json()
            .await
    }

    async fn register(&self, input: &RegisterInput) -> Result<AuthResponse, ApiError> {
        self.client
            .post(endpoints::auth::REGISTER)
            .json(input)?
            .send_json()
            .await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.client
            .get(endpoints::auth::CURRENT_USER)
            .send_json()
            .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client
            .put(endpoints::auth::PROFILE)
            .json(update)?
            .send_json()
            .await
    }

    async fn fetch_products(&self, filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(endpoints::products::LIST)
            .query(filters.to_query())
            .send_json()
            .await
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.client
            .get(endpoints::products::detail(id.as_str()))
            .send_json()
            .await
    }

    async fn fetch_seller_products(&self) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(endpoints::products::SELLER_MINE)
            .send_json()
            .await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.client
            .post(endpoints::products::LIST)
            .json(input)?
            .send_json()
            .await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.client
            .put(endpoints::products::detail(id.as_str()))
            .json(input)?
            .send_json()
            .await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.client
            .delete(endpoints::products::detail(id.as_str()))
            .send()
            .await
    }

    async fn add_review(&self, id: &ProductId, review: &ReviewInput) -> Result<(), ApiError> {
        self.client
            .post(endpoints::products::reviews(id.as_str()))
            .json(review)?
            .send()
            .await
    }

    async fn fetch_cart(&self) -> Result<CartPayload, ApiError> {
        self.client.get(endpoints::cart::GET).send_json().await
    }

    async fn add_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartPayload, ApiError> {
        self.client
            .post(endpoints::cart::ITEMS)
            .json(&json!({ "productId": product_id, "quantity": quantity }))?
            .send_json()
            .await
    }

    async fn update_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartPayload, ApiError> {
        self.client
            .put(endpoints::cart::item(product_id.as_str()))
            .json(&json!({ "quantity": quantity }))?
            .send_json()
            .await
    }

    async fn remove_cart_item(&self, product_id: &ProductId) -> Result<(), ApiError> {
        self.client
            .delete(endpoints::cart::item(product_id.as_str()))
            .send()
            .await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client
            .get(endpoints::orders::LIST_MINE)
            .send_json()
            .await
    }

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client
            .get(endpoints::orders::LIST_ALL)
            .send_json()
            .await
    }

    async fn fetch_seller_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client
            .get(endpoints::orders::SELLER_MINE)
            .send_json()
            .await
    }

    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        self.client
            .post(endpoints::orders::LIST_MINE)
            .json(draft)?
            .send_json()
            .await
    }

    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.client
            .get(endpoints::orders::detail(id.as_str()))
            .send_json()
            .await
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.client
            .patch(endpoints::orders::status(id.as_str()))
            .json(&json!({ "status": status }))?
            .send_json()
            .await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get(endpoints::admin::USERS).send_json().await
    }

    async fn update_user_role(&self, id: &UserId, role: Role) -> Result<User, ApiError> {
        self.client
            .patch(endpoints::admin::user_role(id.as_str()))
            .json(&json!({ "role": role }))?
            .send_json()
            .await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.client
            .delete(endpoints::admin::user(id.as_str()))
            .send()
            .await
    }
}
