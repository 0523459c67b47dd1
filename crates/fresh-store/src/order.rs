//! Order store.

use crate::backend::Backend;
use fresh_commerce::prelude::*;
use fresh_data::ApiError;
use std::sync::Arc;

/// Order slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderState {
    /// Whichever order list was fetched last (mine, all, or seller's).
    pub orders: Vec<Order>,
    /// The order just created or being viewed.
    pub current_order: Option<Order>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after a successful create/status update.
    pub success: bool,
    /// Set when the server rejected the credential (401/403). The view
    /// reads this and calls `AuthStore::expire_session`.
    pub unauthorized: bool,
}

/// State transitions for the order slice.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTransition {
    Pending,
    ListLoaded(Vec<Order>),
    DetailLoaded(Order),
    Created(Order),
    /// Status update succeeded; also patch the matching list entry so
    /// list views stay consistent without a refetch.
    StatusUpdated(Order),
    Failed(String),
    Unauthorized(String),
}

impl OrderState {
    /// Pure reducer for the order slice.
    pub fn apply(&mut self, transition: OrderTransition) {
        match transition {
            OrderTransition::Pending => {
                self.loading = true;
                self.error = None;
                self.success = false;
                self.unauthorized = false;
            }
            OrderTransition::ListLoaded(orders) => {
                self.loading = false;
                self.orders = orders;
            }
            OrderTransition::DetailLoaded(order) => {
                self.loading = false;
                self.current_order = Some(order);
            }
            OrderTransition::Created(order) => {
                self.loading = false;
                self.current_order = Some(order);
                self.success = true;
            }
            OrderTransition::StatusUpdated(order) => {
                self.loading = false;
                if let Some(existing) = self.orders.iter_mut().find(|o| o.id == order.id) {
                    *existing = order.clone();
                }
                self.current_order = Some(order);
                self.success = true;
            }
            OrderTransition::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
                self.success = false;
            }
            OrderTransition::Unauthorized(message) => {
                self.loading = false;
                self.error = Some(message);
                self.success = false;
                self.unauthorized = true;
            }
        }
    }
}

/// Owns the order slice and drives its operations.
pub struct OrderStore<B: Backend> {
    backend: Arc<B>,
    state: OrderState,
}

impl<B: Backend> OrderStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: OrderState::default(),
        }
    }

    /// Current slice state.
    pub fn state(&self) -> &OrderState {
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
    fn failed(&self, err: &ApiError, fallback: &str) -> OrderTransition {
        let message = err.message().unwrap_or(fallback).to_string();
        if err.is_auth() {
            self.backend.set_credential(None);
            OrderTransition::Unauthorized(message)
        } else {
            OrderTransition::Failed(message)
        }
    }

    /// Fetch the authenticated buyer's orders.
    pub async fn fetch_mine(&mut self) {
        self.state.apply(OrderTransition::Pending);
        match self.backend.fetch_orders().await {
            Ok(orders) => self.state.apply(OrderTransition::ListLoaded(orders)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch orders");
                self.state.apply(transition);
            }
        }
    }

    /// Fetch every order on the platform (admin dashboard).
    pub async fn fetch_all(&mut self) {
        self.state.apply(OrderTransition::Pending);
        match self.backend.fetch_all_orders().await {
            Ok(orders) => self.state.apply(OrderTransition::ListLoaded(orders)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch orders");
                self.state.apply(transition);
            }
        }
    }

    /// Fetch orders containing the authenticated seller's products.
    pub async fn fetch_seller_orders(&mut self) {
        self.state.apply(OrderTransition::Pending);
        match self.backend.fetch_seller_orders().await {
            Ok(orders) => self.state.apply(OrderTransition::ListLoaded(orders)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch orders");
                self.state.apply(transition);
            }
        }
    }

    /// Place an order from a cart snapshot (see [`OrderDraft::from_cart`]).
    pub async fn create(&mut self, draft: &OrderDraft) {
        self.state.apply(OrderTransition::Pending);
        match self.backend.create_order(draft).await {
            Ok(order) => {
                tracing::debug!(order = %order.id, total = order.total_amount, "order placed");
                self.state.apply(OrderTransition::Created(order));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to create order");
                self.state.apply(transition);
            }
        }
    }

    /// Fetch one order for the detail view.
    pub async fn fetch_by_id(&mut self, id: &OrderId) {
        self.state.apply(OrderTransition::Pending);
        match self.backend.fetch_order(id).await {
            Ok(order) => self.state.apply(OrderTransition::DetailLoaded(order)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch order");
                self.state.apply(transition);
            }
        }
    }

    /// Request a status change. Any status may be requested from any
    /// other; the server decides which transitions are legal.
    pub async fn update_status(&mut self, id: &OrderId, status: OrderStatus) {
        self.state.apply(OrderTransition::Pending);
        match self.backend.update_order_status(id, status).await {
            Ok(order) => {
                tracing::debug!(order = %order.id, status = %order.status, "order status updated");
                self.state.apply(OrderTransition::StatusUpdated(order));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to update order status");
                self.state.apply(transition);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{cart_line, MockBackend};
    use fresh_data::ApiError;

    fn address() -> ShippingAddress {
        ShippingAddress {
            street: "12 Market Rd".to_string(),
            city: "Pune".to_string(),
            state: "MH".to_string(),
            pincode: "411001".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    fn store() -> (Arc<MockBackend>, OrderStore<MockBackend>) {
        let backend = Arc::new(MockBackend::with_catalog());
        let store = OrderStore::new(backend.clone());
        (backend, store)
    }

    #[tokio::test]
    async fn test_create_sets_current_and_success() {
        let (_, mut orders) = store();
        let lines = vec![cart_line("p1", "s1", 100.0, 2), cart_line("p2", "s2", 50.0, 1)];
        let draft = OrderDraft::from_cart(&lines, address(), PaymentMethod::Cod).unwrap();
        orders.create(&draft).await;

        let placed = orders.state().current_order.as_ref().unwrap();
        // Server echoes the drafted total: subtotal + delivery fee.
        assert_eq!(placed.total_amount, 300.0);
        assert_eq!(placed.status, OrderStatus::Pending);
        assert!(orders.state().success);
    }

    #[tokio::test]
    async fn test_create_failure_clears_success() {
        let (backend, mut orders) = store();
        let lines = vec![cart_line("p1", "s1", 10.0, 1)];
        let draft = OrderDraft::from_cart(&lines, address(), PaymentMethod::Cod).unwrap();
        backend.fail_next(ApiError::from_status(400, Some("Out of stock".to_string())));
        orders.create(&draft).await;
        assert!(!orders.state().success);
        assert_eq!(orders.state().error.as_deref(), Some("Out of stock"));
        assert!(orders.state().current_order.is_none());
    }

    #[tokio::test]
    async fn test_status_update_patches_list_by_id() {
        let (_, mut orders) = store();
        let lines = vec![cart_line("p1", "s1", 10.0, 1)];
        let draft = OrderDraft::from_cart(&lines, address(), PaymentMethod::Cod).unwrap();
        orders.create(&draft).await;
        let id = orders.state().current_order.as_ref().unwrap().id.clone();

        orders.fetch_mine().await;
        assert_eq!(orders.state().orders.len(), 1);

        orders.update_status(&id, OrderStatus::Shipped).await;
        assert_eq!(orders.state().orders[0].status, OrderStatus::Shipped);
        assert_eq!(
            orders.state().current_order.as_ref().unwrap().status,
            OrderStatus::Shipped
        );
        assert!(orders.state().success);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_empty_list() {
        let (backend, mut orders) = store();
        backend.fail_next(ApiError::Network("offline".to_string()));
        orders.fetch_mine().await;
        assert!(orders.state().orders.is_empty());
        assert_eq!(
            orders.state().error.as_deref(),
            Some("Failed to fetch orders")
        );
    }
}
