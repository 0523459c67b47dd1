//! In-memory backend fake for store tests.
//!
//! Simulates the server's authoritative behavior: cart mutations return
//! the recomputed cart, order creation echoes the drafted total, and a
//! queued failure makes the next call reject.

use crate::backend::{AuthResponse, Backend, Credentials, ProfileUpdate, RegisterInput};
use async_trait::async_trait;
use chrono::Utc;
use fresh_commerce::catalog::{Category, Unit};
use fresh_commerce::prelude::*;
use fresh_data::ApiError;
use std::sync::Mutex;

/// Build a catalog product for tests.
pub fn product(id: &str, name: &str, seller: &str, price: f64, stock: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: String::new(),
        price,
        category: Category::Fruits,
        unit: Unit::Kg,
        stock,
        image_url: String::new(),
        seller: UserId::new(seller),
        average_rating: 0.0,
        reviews: Vec::new(),
        nutrition: None,
    }
}

/// Build a cart line for tests.
pub fn cart_line(id: &str, seller: &str, price: f64, quantity: i64) -> CartItem {
    CartItem {
        product: product(id, id, seller, price, 100),
        quantity,
        price,
    }
}

pub struct MockBackend {
    products: Mutex<Vec<Product>>,
    cart: Mutex<CartPayload>,
    orders: Mutex<Vec<Order>>,
    users: Mutex<Vec<User>>,
    credential: Mutex<Option<String>>,
    fail_next: Mutex<Option<ApiError>>,
    order_seq: Mutex<u32>,
}

impl MockBackend {
    /// A backend seeded with two products and two users.
    pub fn with_catalog() -> Self {
        Self {
            products: Mutex::new(vec![
                product("p1", "Mango", "s1", 100.0, 50),
                product("p2", "Banana", "s2", 50.0, 30),
            ]),
            cart: Mutex::new(CartPayload::default()),
            orders: Mutex::new(Vec::new()),
            users: Mutex::new(vec![
                User {
                    id: UserId::new("u1"),
                    name: "Asha".to_string(),
                    email: "asha@example.com".to_string(),
                    role: Role::Buyer,
                },
                User {
                    id: UserId::new("u2"),
                    name: "Sam".to_string(),
                    email: "sam@example.com".to_string(),
                    role: Role::Seller,
                },
            ]),
            credential: Mutex::new(None),
            fail_next: Mutex::new(None),
            order_seq: Mutex::new(0),
        }
    }

    /// Make the next call fail with the given error.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// The credential most recently attached via `set_credential`.
    pub fn credential(&self) -> Option<String> {
        self.credential.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn primary_user(&self) -> User {
        self.users.lock().unwrap()[0].clone()
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::from_status(404, Some(format!("{what} not found")))
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn set_credential(&self, token: Option<String>) {
        *self.credential.lock().unwrap() = token;
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.take_failure()?;
        let mut user = self.primary_user();
        user.email = credentials.email.clone();
        Ok(AuthResponse {
            token: "test-token".to_string(),
            user,
        })
    }

    async fn register(&self, input: &RegisterInput) -> Result<AuthResponse, ApiError> {
        self.take_failure()?;
        Ok(AuthResponse {
            token: "test-token".to_string(),
            user: User {
                id: UserId::new("u-new"),
                name: input.name.clone(),
                email: input.email.clone(),
                role: Role::Buyer,
            },
        })
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.take_failure()?;
        Ok(self.primary_user())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.take_failure()?;
        let mut user = self.primary_user();
        user.name = update.name.clone();
        user.email = update.email.clone();
        Ok(user)
    }

    async fn fetch_products(&self, _filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
        self.take_failure()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.take_failure()?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("Product"))
    }

    async fn fetch_seller_products(&self) -> Result<Vec<Product>, ApiError> {
        self.take_failure()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.take_failure()?;
        let created = Product {
            id: ProductId::new(format!("p{}", self.products.lock().unwrap().len() + 1)),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            category: input.category,
            unit: input.unit,
            stock: input.stock,
            image_url: input.image_url.clone(),
            seller: UserId::new("s1"),
            average_rating: 0.0,
            reviews: Vec::new(),
            nutrition: input.nutrition.clone(),
        };
        self.products.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.take_failure()?;
        let mut products = self.products.lock().unwrap();
        let existing = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Self::not_found("Product"))?;
        existing.name = input.name.clone();
        existing.description = input.description.clone();
        existing.price = input.price;
        existing.category = input.category;
        existing.unit = input.unit;
        existing.stock = input.stock;
        existing.image_url = input.image_url.clone();
        existing.nutrition = input.nutrition.clone();
        Ok(existing.clone())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.take_failure()?;
        self.products.lock().unwrap().retain(|p| &p.id != id);
        Ok(())
    }

    async fn add_review(&self, _id: &ProductId, _review: &ReviewInput) -> Result<(), ApiError> {
        self.take_failure()
    }

    async fn fetch_cart(&self) -> Result<CartPayload, ApiError> {
        self.take_failure()?;
        Ok(self.cart.lock().unwrap().clone())
    }

    async fn add_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartPayload, ApiError> {
        self.take_failure()?;
        let product = self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == product_id)
            .cloned()
            .ok_or_else(|| Self::not_found("Product"))?;
        let mut cart = self.cart.lock().unwrap();
        match cart.items.iter_mut().find(|i| &i.product.id == product_id) {
            Some(line) => line.quantity += quantity,
            None => cart.items.push(CartItem {
                price: product.price,
                product,
                quantity,
            }),
        }
        cart.total_amount = subtotal(&cart.items);
        Ok(cart.clone())
    }

    async fn update_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartPayload, ApiError> {
        self.take_failure()?;
        let mut cart = self.cart.lock().unwrap();
        let line = cart
            .items
            .iter_mut()
            .find(|i| &i.product.id == product_id)
            .ok_or_else(|| Self::not_found("Cart item"))?;
        line.quantity = quantity;
        cart.total_amount = subtotal(&cart.items);
        Ok(cart.clone())
    }

    async fn remove_cart_item(&self, product_id: &ProductId) -> Result<(), ApiError> {
        self.take_failure()?;
        let mut cart = self.cart.lock().unwrap();
        cart.items.retain(|i| &i.product.id != product_id);
        cart.total_amount = subtotal(&cart.items);
        Ok(())
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.take_failure()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.take_failure()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn fetch_seller_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.take_failure()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        self.take_failure()?;
        let mut seq = self.order_seq.lock().unwrap();
        *seq += 1;
        let order = Order {
            id: OrderId::new(format!("o{seq}")),
            user: UserId::new("u1"),
            items: draft.items.clone(),
            shipping_address: draft.shipping_address.clone(),
            payment_method: draft.payment_method,
            status: OrderStatus::Pending,
            total_amount: draft.total_amount,
            created_at: Utc::now(),
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.take_failure()?;
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("Order"))
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.take_failure()?;
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| Self::not_found("Order"))?;
        order.status = status;
        Ok(order.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.take_failure()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_user_role(&self, id: &UserId, role: Role) -> Result<User, ApiError> {
        self.take_failure()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| Self::not_found("User"))?;
        user.role = role;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.take_failure()?;
        self.users.lock().unwrap().retain(|u| &u.id != id);
        Ok(())
    }
}
