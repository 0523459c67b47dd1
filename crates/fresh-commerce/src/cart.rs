//! Cart line types and the server-returned cart payload.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A line in the shopping cart.
///
/// `price` is the unit price captured when the line was added; order
/// creation uses this captured price, not a re-fetched product price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product this line refers to (embedded by the backend).
    pub product: Product,
    /// Quantity in the cart. Always positive.
    pub quantity: i64,
    /// Captured unit price.
    pub price: f64,
}

impl CartItem {
    /// Line total for this item.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// The full cart as returned by every cart endpoint.
///
/// The backend is the source of truth for `total_amount`; the client
/// stores it verbatim rather than recomputing it (except the optimistic
/// remove path, which recomputes from the remaining lines).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartPayload {
    pub items: Vec<CartItem>,
    pub total_amount: f64,
}

/// Sum of `price * quantity` over the given lines.
pub fn subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}
