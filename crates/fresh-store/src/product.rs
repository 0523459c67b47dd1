//! Product store.

use crate::backend::Backend;
use fresh_commerce::prelude::*;
use fresh_data::ApiError;
use std::sync::Arc;

/// Product slice state.
///
/// `products` holds whichever list was fetched last (storefront list or
/// the seller's own); `product` is the detail view's selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductState {
    pub products: Vec<Product>,
    pub product: Option<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after a successful mutation; the view clears it once shown.
    pub success: bool,
    /// Set when the server rejected the credential (401/403). The view
    /// reads this and calls `AuthStore::expire_session`.
    pub unauthorized: bool,
}

/// State transitions for the product slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductTransition {
    Pending,
    ListLoaded(Vec<Product>),
    DetailLoaded(Product),
    Created(Product),
    Updated(Product),
    Deleted(ProductId),
    ReviewAdded,
    Failed(String),
    Unauthorized(String),
}

impl ProductState {
    /// Pure reducer for the product slice.
    pub fn apply(&mut self, transition: ProductTransition) {
        match transition {
            ProductTransition::Pending => {
                self.loading = true;
                self.error = None;
                self.unauthorized = false;
            }
            ProductTransition::ListLoaded(products) => {
                self.loading = false;
                self.products = products;
            }
            ProductTransition::DetailLoaded(product) => {
                self.loading = false;
                self.product = Some(product);
            }
            ProductTransition::Created(product) => {
                self.loading = false;
                self.products.push(product);
                self.success = true;
            }
            ProductTransition::Updated(product) => {
                self.loading = false;
                if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *existing = product;
                }
                self.success = true;
            }
            ProductTransition::Deleted(id) => {
                self.loading = false;
                self.products.retain(|p| p.id != id);
                self.success = true;
            }
            ProductTransition::ReviewAdded => {
                self.loading = false;
                self.success = true;
            }
            ProductTransition::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ProductTransition::Unauthorized(message) => {
                self.loading = false;
                self.error = Some(message);
                self.unauthorized = true;
            }
        }
    }
}

/// Owns the product slice and drives its operations.
///
/// Create/update/delete are seller/admin operations; the server enforces
/// that, the client only gates the UI entry points (see `fresh-router`).
pub struct ProductStore<B: Backend> {
    backend: Arc<B>,
    state: ProductState,
}

impl<B: Backend> ProductStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: ProductState::default(),
        }
    }

    /// Current slice state.
    pub fn state(&self) -> &ProductState {
        &self.state
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    pub fn clear_success(&mut self) {
        self.state.success = false;
    }

    /// Map a request failure to a transition. A 401/403 drops the
    /// credential from the transport so the stale token is not
    /// re-attached, and flags the slice for a session reset.
    fn failed(&self, err: &ApiError, fallback: &str) -> ProductTransition {
        let message = err.message().unwrap_or(fallback).to_string();
        if err.is_auth() {
            self.backend.set_credential(None);
            ProductTransition::Unauthorized(message)
        } else {
            ProductTransition::Failed(message)
        }
    }

    /// Fetch the storefront list. Category/search filters go to the
    /// backend; sorting and price filtering stay client-side
    /// (`fresh_commerce::search`).
    pub async fn fetch(&mut self, filters: &ProductFilters) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.fetch_products(filters).await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products loaded");
                self.state.apply(ProductTransition::ListLoaded(products));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch products");
                self.state.apply(transition);
            }
        }
    }

    /// Fetch one product for the detail view.
    pub async fn fetch_by_id(&mut self, id: &ProductId) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.fetch_product(id).await {
            Ok(product) => self.state.apply(ProductTransition::DetailLoaded(product)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch product");
                self.state.apply(transition);
            }
        }
    }

    /// Fetch the authenticated seller's own products.
    pub async fn fetch_seller_products(&mut self) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.fetch_seller_products().await {
            Ok(products) => self.state.apply(ProductTransition::ListLoaded(products)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch products");
                self.state.apply(transition);
            }
        }
    }

    /// Create a product listing.
    pub async fn create(&mut self, input: &ProductInput) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.create_product(input).await {
            Ok(product) => {
                tracing::debug!(product = %product.id, "product created");
                self.state.apply(ProductTransition::Created(product));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to create product");
                self.state.apply(transition);
            }
        }
    }

    /// Update a product listing; the list entry is replaced in place.
    pub async fn update(&mut self, id: &ProductId, input: &ProductInput) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.update_product(id, input).await {
            Ok(product) => self.state.apply(ProductTransition::Updated(product)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to update product");
                self.state.apply(transition);
            }
        }
    }

    /// Delete a product listing. Hard removal, no undo.
    pub async fn delete(&mut self, id: &ProductId) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.delete_product(id).await {
            Ok(()) => {
                tracing::debug!(product = %id, "product deleted");
                self.state.apply(ProductTransition::Deleted(id.clone()));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to delete product");
                self.state.apply(transition);
            }
        }
    }

    /// Submit a review. Rating bounds are validated at the view edge.
    pub async fn add_review(&mut self, product_id: &ProductId, review: &ReviewInput) {
        self.state.apply(ProductTransition::Pending);
        match self.backend.add_review(product_id, review).await {
            Ok(()) => self.state.apply(ProductTransition::ReviewAdded),
            Err(err) => {
                let transition = self.failed(&err, "Failed to add review");
                self.state.apply(transition);
            }
        }
    }
}
