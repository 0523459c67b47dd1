//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in marketplace domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds available stock.
    #[error("Quantity {requested} exceeds available stock ({available})")]
    InsufficientStock { requested: i64, available: i64 },

    /// Cart has no items to order from.
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// Unknown role string.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Unknown order status string.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}
