//! Grocery marketplace domain types and logic for FreshMart.
//!
//! This crate provides the shared vocabulary of the storefront client:
//!
//! - **Users**: Accounts and the buyer/seller/admin role model
//! - **Catalog**: Products, categories, units, reviews
//! - **Cart**: Cart lines and the server-returned cart payload
//! - **Checkout**: Shipping addresses, orders, order drafting
//! - **Search**: Client-side sorting and price filtering of fetched lists
//!
//! All wire-facing types derive `Serialize`/`Deserialize` and match the
//! backend's JSON contract field-for-field (camelCase on the wire).
//!
//! # Example
//!
//! ```rust,ignore
//! use fresh_commerce::prelude::*;
//!
//! // Draft an order from a cart snapshot
//! let draft = OrderDraft::from_cart(&cart.items, address, PaymentMethod::Cod)?;
//! assert_eq!(draft.total_amount, subtotal(&cart.items) + DELIVERY_FEE);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod search;
pub mod user;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Users
    pub use crate::user::{Role, User};

    // Catalog
    pub use crate::catalog::{
        Category, Nutrition, Product, ProductInput, Review, ReviewInput, Unit,
    };

    // Cart
    pub use crate::cart::{subtotal, CartItem, CartPayload};

    // Checkout
    pub use crate::checkout::{
        Order, OrderDraft, OrderItem, OrderStatus, PaymentMethod, ShippingAddress, DELIVERY_FEE,
    };

    // Search
    pub use crate::search::{
        filter_by_price, sort_products, PriceRange, ProductFilters, SortOption,
    };
}
