//! Cart store.
//!
//! Mutations trust the server: a successful add/update replaces the whole
//! cart with the response. Removal is the one optimistic exception: the
//! removed line is filtered locally and the total recomputed from what
//! remains, matching the backend's own arithmetic.

use crate::backend::Backend;
use fresh_commerce::prelude::*;
use fresh_data::ApiError;
use std::sync::Arc;

/// Cart slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub loading: bool,
    /// Last failed operation's message. The store never auto-clears it;
    /// the view presents it and calls `clear_error`.
    pub error: Option<String>,
    /// Set when the server rejected the credential (401/403). The view
    /// reads this and calls `AuthStore::expire_session`.
    pub unauthorized: bool,
}

/// State transitions for the cart slice.
#[derive(Debug, Clone, PartialEq)]
pub enum CartTransition {
    /// A cart request started.
    Pending,
    /// The server returned the updated cart; adopt it verbatim.
    Loaded(CartPayload),
    /// A removal succeeded; drop the line locally and recompute.
    Removed(ProductId),
    /// The request failed; prior items stay untouched.
    Failed(String),
    /// The server rejected the credential; the session must be reset.
    Unauthorized(String),
    /// Local reset (after successful checkout).
    Cleared,
}

impl CartState {
    /// Pure reducer for the cart slice.
    pub fn apply(&mut self, transition: CartTransition) {
        match transition {
            CartTransition::Pending => {
                self.loading = true;
                self.error = None;
                self.unauthorized = false;
            }
            CartTransition::Loaded(payload) => {
                self.loading = false;
                self.items = payload.items;
                self.total_amount = payload.total_amount;
                self.error = None;
            }
            CartTransition::Removed(product_id) => {
                self.loading = false;
                self.items.retain(|item| item.product.id != product_id);
                self.total_amount = subtotal(&self.items);
                self.error = None;
            }
            CartTransition::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            CartTransition::Unauthorized(message) => {
                self.loading = false;
                self.error = Some(message);
                self.unauthorized = true;
            }
            CartTransition::Cleared => {
                self.items.clear();
                self.total_amount = 0.0;
            }
        }
    }

    /// Total quantity across all lines (navbar badge).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owns the cart slice and drives its operations.
///
/// Quantity bounds (`1..=stock`) are enforced at the view edge, not here;
/// the store forwards what it is given and surfaces server-side
/// validation errors verbatim.
pub struct CartStore<B: Backend> {
    backend: Arc<B>,
    state: CartState,
}

impl<B: Backend> CartStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: CartState::default(),
        }
    }

    /// Current slice state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Map a request failure to a transition. A 401/403 drops the
    /// credential from the transport so the stale token is not
    /// re-attached, and flags the slice for a session reset.
    fn failed(&self, err: &ApiError, fallback: &str) -> CartTransition {
        let message = err.message().unwrap_or(fallback).to_string();
        if err.is_auth() {
            self.backend.set_credential(None);
            CartTransition::Unauthorized(message)
        } else {
            CartTransition::Failed(message)
        }
    }

    /// Reset the cart locally, without a server round-trip.
    pub fn clear(&mut self) {
        self.state.apply(CartTransition::Cleared);
    }

    /// Fetch the cart from the server.
    pub async fn fetch(&mut self) {
        self.state.apply(CartTransition::Pending);
        match self.backend.fetch_cart().await {
            Ok(payload) => self.state.apply(CartTransition::Loaded(payload)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch cart");
                self.state.apply(transition);
            }
        }
    }

    /// Add a product to the cart.
    pub async fn add_item(&mut self, product_id: &ProductId, quantity: i64) {
        self.state.apply(CartTransition::Pending);
        match self.backend.add_cart_item(product_id, quantity).await {
            Ok(payload) => {
                tracing::debug!(product = %product_id, quantity, "added to cart");
                self.state.apply(CartTransition::Loaded(payload));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to add item to cart");
                self.state.apply(transition);
            }
        }
    }

    /// Change a line's quantity.
    pub async fn update_item(&mut self, product_id: &ProductId, quantity: i64) {
        self.state.apply(CartTransition::Pending);
        match self.backend.update_cart_item(product_id, quantity).await {
            Ok(payload) => self.state.apply(CartTransition::Loaded(payload)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to update cart item");
                self.state.apply(transition);
            }
        }
    }

    /// Remove a line. Optimistic: on success the line is filtered locally
    /// and the total recomputed, rather than refetching the cart.
    pub async fn remove_item(&mut self, product_id: &ProductId) {
        self.state.apply(CartTransition::Pending);
        match self.backend.remove_cart_item(product_id).await {
            Ok(()) => {
                tracing::debug!(product = %product_id, "removed from cart");
                self.state
                    .apply(CartTransition::Removed(product_id.clone()));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to remove item from cart");
                self.state.apply(transition);
            }
        }
    }
}
