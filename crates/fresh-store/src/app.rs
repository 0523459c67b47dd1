//! Application state container.

use crate::admin::AdminStore;
use crate::auth::AuthStore;
use crate::backend::Backend;
use crate::cart::CartStore;
use crate::order::OrderStore;
use crate::product::ProductStore;
use std::sync::Arc;

/// The whole client state, one store per domain slice.
///
/// Explicitly owned: build one at process start, pass it by reference to
/// the view layer, drop it on exit. There are no ambient singletons.
/// Each store exclusively owns its slice; cross-slice reads (e.g.,
/// checkout reading cart and order together) are read-only joins at the
/// call site.
pub struct AppStore<B: Backend> {
    pub auth: AuthStore<B>,
    pub cart: CartStore<B>,
    pub products: ProductStore<B>,
    pub orders: OrderStore<B>,
    pub admin: AdminStore<B>,
}

impl<B: Backend> AppStore<B> {
    /// Build the container over a single shared backend.
    pub fn new(backend: B) -> Self {
        Self::with_shared(Arc::new(backend))
    }

    /// Build the container over an already-shared backend handle.
    pub fn with_shared(backend: Arc<B>) -> Self {
        Self {
            auth: AuthStore::new(backend.clone()),
            cart: CartStore::new(backend.clone()),
            products: ProductStore::new(backend.clone()),
            orders: OrderStore::new(backend.clone()),
            admin: AdminStore::new(backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{cart_line, MockBackend};
    use fresh_commerce::prelude::*;

    #[tokio::test]
    async fn test_checkout_reads_cart_snapshot() {
        let mut app = AppStore::new(MockBackend::with_catalog());
        app.auth.login("asha@example.com", "secret1").await;
        app.cart.add_item(&ProductId::new("p1"), 2).await;
        app.cart.add_item(&ProductId::new("p2"), 1).await;

        // Checkout: snapshot the cart, draft, place, clear.
        let address = ShippingAddress {
            street: "12 Market Rd".to_string(),
            city: "Pune".to_string(),
            state: "MH".to_string(),
            pincode: "411001".to_string(),
            phone: "9876543210".to_string(),
        };
        let draft =
            OrderDraft::from_cart(&app.cart.state().items, address, PaymentMethod::Cod).unwrap();
        app.orders.create(&draft).await;
        assert!(app.orders.state().success);
        assert_eq!(
            app.orders.state().current_order.as_ref().unwrap().total_amount,
            subtotal(&app.cart.state().items) + DELIVERY_FEE
        );

        app.cart.clear();
        assert!(app.cart.state().is_empty());
    }

    #[tokio::test]
    async fn test_order_price_survives_product_price_change() {
        // A concurrent price change must not retroactively affect the
        // drafted order: lines capture the cart's price.
        let lines = vec![cart_line("p1", "s1", 100.0, 2)];
        let address = ShippingAddress::default();
        let draft = OrderDraft::from_cart(&lines, address, PaymentMethod::Cod).unwrap();

        let mut app = AppStore::new(MockBackend::with_catalog());
        app.products
            .update(
                &ProductId::new("p1"),
                &ProductInput {
                    name: "Mango".to_string(),
                    description: String::new(),
                    price: 500.0,
                    category: fresh_commerce::catalog::Category::Fruits,
                    unit: fresh_commerce::catalog::Unit::Kg,
                    stock: 50,
                    image_url: String::new(),
                    nutrition: None,
                },
            )
            .await;

        app.orders.create(&draft).await;
        let placed = app.orders.state().current_order.as_ref().unwrap();
        assert_eq!(placed.items[0].price, 100.0);
        assert_eq!(placed.total_amount, 250.0);
    }
}
