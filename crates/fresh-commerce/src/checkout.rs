//! Checkout types: shipping address, orders, order drafting.

use crate::cart::{subtotal, CartItem};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flat delivery fee added to every order, in currency units.
///
/// This is policy, not configuration: the checkout summary and the drafted
/// order total must agree on it exactly.
pub const DELIVERY_FEE: f64 = 50.0;

/// Order status as reported by the backend.
///
/// The client requests status changes but enforces no transition graph;
/// the server is authoritative on which transitions are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Processing,
    /// Order handed to delivery.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses, for status-picker UI.
    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(CommerceError::UnknownStatus(other.to_string())),
        }
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,
    /// Online payment (handled by an external gateway).
    Online,
}

/// A delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    /// 6-digit postal code.
    pub pincode: String,
    /// 10-digit contact number.
    pub phone: String,
}

/// A line in an order.
///
/// Captures product, quantity, unit price, and seller at submission time,
/// so a later price change does not affect a pending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product: ProductId,
    pub quantity: i64,
    pub price: f64,
    pub seller: UserId,
}

impl OrderItem {
    /// Line total for this item.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// The buyer who placed the order.
    pub user: UserId,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an order, built from a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub total_amount: f64,
}

impl OrderDraft {
    /// Build an order draft from the cart lines at this moment.
    ///
    /// Each line captures the cart's unit price and the product's seller;
    /// `total_amount` is the item subtotal plus [`DELIVERY_FEE`].
    pub fn from_cart(
        items: &[CartItem],
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let lines: Vec<OrderItem> = items
            .iter()
            .map(|item| OrderItem {
                product: item.product.id.clone(),
                quantity: item.quantity,
                price: item.price,
                seller: item.product.seller.clone(),
            })
            .collect();

        Ok(Self {
            items: lines,
            shipping_address,
            payment_method,
            total_amount: subtotal(items) + DELIVERY_FEE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartPayload;
    use crate::catalog::{Category, Product, Unit};

    fn line(id: &str, seller: &str, price: f64, quantity: i64) -> CartItem {
        CartItem {
            product: Product {
                id: ProductId::new(id),
                name: id.to_string(),
                description: String::new(),
                price,
                category: Category::Vegetables,
                unit: Unit::Kg,
                stock: 50,
                image_url: String::new(),
                seller: UserId::new(seller),
                average_rating: 0.0,
                reviews: Vec::new(),
                nutrition: None,
            },
            quantity,
            price,
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            street: "12 Market Rd".to_string(),
            city: "Pune".to_string(),
            state: "MH".to_string(),
            pincode: "411001".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_draft_total_includes_delivery_fee() {
        // Cart [{price:100,qty:2},{price:50,qty:1}] drafts to 100*2+50*1+50 = 300.
        let items = vec![line("p1", "s1", 100.0, 2), line("p2", "s2", 50.0, 1)];
        let draft = OrderDraft::from_cart(&items, address(), PaymentMethod::Cod).unwrap();
        assert_eq!(draft.total_amount, 300.0);
        assert_eq!(draft.items.len(), 2);
    }

    #[test]
    fn test_draft_captures_price_and_seller() {
        let items = vec![line("p1", "s9", 80.0, 3)];
        let draft = OrderDraft::from_cart(&items, address(), PaymentMethod::Online).unwrap();
        assert_eq!(draft.items[0].product, ProductId::new("p1"));
        assert_eq!(draft.items[0].price, 80.0);
        assert_eq!(draft.items[0].seller, UserId::new("s9"));
        assert_eq!(draft.items[0].quantity, 3);
    }

    #[test]
    fn test_draft_rejects_empty_cart() {
        let cart = CartPayload::default();
        let err = OrderDraft::from_cart(&cart.items, address(), PaymentMethod::Cod).unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in OrderStatus::all() {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_draft_wire_shape() {
        let items = vec![line("p1", "s1", 10.0, 1)];
        let draft = OrderDraft::from_cart(&items, address(), PaymentMethod::Cod).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["totalAmount"], 60.0);
        assert_eq!(json["paymentMethod"], "cod");
        assert_eq!(json["shippingAddress"]["pincode"], "411001");
    }
}
