//! Route access-control guards for the FreshMart storefront.
//!
//! Guards are pure functions of auth state: the view layer calls them on
//! every relevant state change and acts on the returned decision. No
//! caching, no side effects.
//!
//! Two variants:
//!
//! - [`require_auth`] gates views that need any signed-in user
//! - [`require_role`] gates views that need a specific role set
//!
//! The authenticated-only guard renders a loading indicator while the
//! initial session restore is in flight, so a slow restore does not
//! flash-redirect a signed-in user to the login view.

mod guard;

pub use guard::{require_auth, require_role, RouteDecision, HOME_PATH, LOGIN_PATH};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{require_auth, require_role, RouteDecision, HOME_PATH, LOGIN_PATH};
}
