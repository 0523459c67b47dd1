//! Domain state stores for the FreshMart storefront client.
//!
//! Five stores own the client's state, one slice each:
//!
//! - **Auth**: session state machine (anonymous / authenticating /
//!   authenticated) and account operations
//! - **Cart**: server-authoritative cart with one optimistic exception
//! - **Product**: storefront and seller catalog views
//! - **Order**: checkout, order lists, status updates
//! - **Admin**: platform user management
//!
//! Each slice is a plain state struct plus a transition enum and a pure
//! `apply` reducer, so the whole request lifecycle
//! (`pending -> fulfilled | rejected`) is testable without a UI. The
//! async operations drive those reducers against an injected [`Backend`]
//! and never throw past the async boundary: every failure lands in the
//! slice's `error` field, read reactively by the view. A 401/403 from any
//! operation drops the credential from the transport and flags the slice
//! `unauthorized`; the view reacts by calling
//! [`auth::AuthStore::expire_session`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fresh_store::prelude::*;
//!
//! let mut app = AppStore::new(HttpBackend::from_env());
//! app.auth.login("asha@example.com", "secret1").await;
//! if app.auth.state().is_authenticated() {
//!     app.cart.fetch().await;
//! }
//! ```

pub mod admin;
pub mod app;
pub mod auth;
pub mod backend;
pub mod cart;
pub mod http;
pub mod order;
pub mod product;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use app::AppStore;
pub use backend::Backend;
pub use http::HttpBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::admin::{AdminState, AdminStore, AdminTransition};
    pub use crate::app::AppStore;
    pub use crate::auth::{AuthState, AuthStore, AuthTransition, Session};
    pub use crate::backend::{
        AuthResponse, Backend, Credentials, ProfileUpdate, RegisterInput,
    };
    pub use crate::cart::{CartState, CartStore, CartTransition};
    pub use crate::http::HttpBackend;
    pub use crate::order::{OrderState, OrderStore, OrderTransition};
    pub use crate::product::{ProductState, ProductStore, ProductTransition};
    pub use crate::validate::{
        validate_login, validate_profile_update, validate_quantity, validate_registration,
        validate_review, validate_shipping_address, FieldError, ValidationErrors,
    };
}
