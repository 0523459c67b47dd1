//! Guard evaluation.

use fresh_commerce::user::Role;
use fresh_store::auth::AuthState;

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated-but-unauthorized users are sent.
pub const HOME_PATH: &str = "/";

/// What the view layer should do with a guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the protected view.
    Render,
    /// Session restore still in flight: render a neutral loading
    /// indicator, do not redirect yet.
    Loading,
    /// Authentication failure: go to the login view, remembering the
    /// originally requested path so login can return the user there.
    RedirectToLogin {
        /// The path the user originally asked for.
        from: String,
    },
    /// Authorization failure: authenticated, wrong role. Goes to home,
    /// not login; logging in again would not help.
    RedirectHome,
}

/// Gate a route on being signed in.
pub fn require_auth(auth: &AuthState, requested_path: &str) -> RouteDecision {
    if auth.is_loading() {
        return RouteDecision::Loading;
    }
    if !auth.is_authenticated() {
        return RouteDecision::RedirectToLogin {
            from: requested_path.to_string(),
        };
    }
    RouteDecision::Render
}

/// Gate a route on holding one of the allowed roles.
///
/// Renders iff the user is authenticated and their role is in `allowed`.
/// Unauthenticated users go to login (with the requested path
/// preserved); authenticated users with the wrong role go home.
pub fn require_role(auth: &AuthState, allowed: &[Role], requested_path: &str) -> RouteDecision {
    match auth.role() {
        None => RouteDecision::RedirectToLogin {
            from: requested_path.to_string(),
        },
        Some(role) if allowed.contains(&role) => RouteDecision::Render,
        Some(_) => RouteDecision::RedirectHome,
    }
}
