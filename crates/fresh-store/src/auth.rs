//! Auth store: session state machine and account operations.

use crate::backend::{Backend, Credentials, ProfileUpdate, RegisterInput};
use fresh_commerce::prelude::*;
use std::sync::Arc;

/// The session, as a state machine.
///
/// Exactly one of "authenticated with a user" or "not authenticated"
/// holds at any time; there is no partial state to get wrong.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// No session.
    #[default]
    Anonymous,
    /// An auth request (login, register, or session restore) is in flight.
    Authenticating,
    /// Logged in.
    Authenticated(User),
}

/// Auth slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub session: Session,
    /// Last failed attempt's message. Orthogonal to `session`; cleared
    /// when a new attempt starts, never auto-cleared otherwise.
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated(_))
    }

    /// Whether an auth request is in flight (initial restore included).
    pub fn is_loading(&self) -> bool {
        matches!(self.session, Session::Authenticating)
    }

    pub fn user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}

/// State transitions for the auth slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthTransition {
    /// An auth request started.
    Started,
    /// Login/register/restore succeeded.
    SignedIn(User),
    /// An attempt failed; remain anonymous with the message surfaced.
    Failed(String),
    /// Session restore failed; back to anonymous, no error surfaced.
    RestoreFailed,
    /// Logged out.
    SignedOut,
    /// Profile update succeeded; stay authenticated with fresh data.
    ProfileUpdated(User),
    /// A profile update failed; stay authenticated, surface the message.
    ProfileFailed(String),
}

impl AuthState {
    /// Pure reducer for the auth slice.
    pub fn apply(&mut self, transition: AuthTransition) {
        match transition {
            AuthTransition::Started => {
                self.session = Session::Authenticating;
                self.error = None;
            }
            AuthTransition::SignedIn(user) => {
                self.session = Session::Authenticated(user);
                self.error = None;
            }
            AuthTransition::Failed(message) => {
                self.session = Session::Anonymous;
                self.error = Some(message);
            }
            AuthTransition::RestoreFailed => {
                self.session = Session::Anonymous;
                self.error = None;
            }
            AuthTransition::SignedOut => {
                self.session = Session::Anonymous;
                self.error = None;
            }
            AuthTransition::ProfileUpdated(user) => {
                self.session = Session::Authenticated(user);
                self.error = None;
            }
            AuthTransition::ProfileFailed(message) => {
                self.error = Some(message);
            }
        }
    }
}

/// Owns the auth slice and drives its operations.
pub struct AuthStore<B: Backend> {
    backend: Arc<B>,
    state: AuthState,
    token: Option<String>,
}

impl<B: Backend> AuthStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: AuthState::default(),
            token: None,
        }
    }

    /// Current slice state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Current session credential, for the view layer to persist.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    fn store_credential(&mut self, token: Option<String>) {
        self.backend.set_credential(token.clone());
        self.token = token;
    }

    /// Log in with email and password.
    ///
    /// Field validation (non-empty inputs, email shape) happens at the
    /// view edge before dispatch.
    pub async fn login(&mut self, email: &str, password: &str) {
        self.state.apply(AuthTransition::Started);
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.backend.login(&credentials).await {
            Ok(response) => {
                tracing::debug!(user = %response.user.id, "login succeeded");
                self.store_credential(Some(response.token));
                self.state.apply(AuthTransition::SignedIn(response.user));
            }
            Err(err) => {
                tracing::debug!(error = %err, "login failed");
                self.state.apply(AuthTransition::Failed(
                    err.message().unwrap_or("Failed to log in").to_string(),
                ));
            }
        }
    }

    /// Register a new account. Every self-service signup becomes a buyer;
    /// seller and admin roles are assigned out-of-band.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) {
        self.state.apply(AuthTransition::Started);
        let input = RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.backend.register(&input).await {
            Ok(response) => {
                tracing::debug!(user = %response.user.id, "registration succeeded");
                self.store_credential(Some(response.token));
                self.state.apply(AuthTransition::SignedIn(response.user));
            }
            Err(err) => {
                self.state.apply(AuthTransition::Failed(
                    err.message().unwrap_or("Failed to register").to_string(),
                ));
            }
        }
    }

    /// Restore the session from a persisted credential at startup.
    ///
    /// A failed restore clears the session without surfacing an error:
    /// the user simply lands anonymous. An invalid credential is dropped
    /// so it is not re-attached to later requests.
    pub async fn restore(&mut self, token: String) {
        self.store_credential(Some(token));
        self.state.apply(AuthTransition::Started);
        match self.backend.current_user().await {
            Ok(user) => {
                tracing::debug!(user = %user.id, "session restored");
                self.state.apply(AuthTransition::SignedIn(user));
            }
            Err(err) => {
                if err.is_auth() {
                    self.store_credential(None);
                }
                tracing::debug!(error = %err, "session restore failed");
                self.state.apply(AuthTransition::RestoreFailed);
            }
        }
    }

    /// Log out. Synchronous: clears the credential and session locally
    /// without waiting on the network.
    pub fn logout(&mut self) {
        tracing::debug!("logged out");
        self.store_credential(None);
        self.state.apply(AuthTransition::SignedOut);
    }

    /// Force a session reset: the server rejected the credential.
    ///
    /// Called internally when an operation here fails with 401/403, and
    /// by the view layer when another slice flags `unauthorized`.
    pub fn expire_session(&mut self) {
        tracing::debug!("session expired");
        self.store_credential(None);
        self.state.apply(AuthTransition::Failed(
            "Session expired. Please log in again.".to_string(),
        ));
    }

    /// Update the authenticated user's profile in place.
    ///
    /// A 401/403 here means the credential is no longer valid; the session
    /// is reset rather than staying authenticated with a stale token.
    pub async fn update_profile(&mut self, update: ProfileUpdate) {
        if !self.state.is_authenticated() {
            self.state.apply(AuthTransition::ProfileFailed(
                "Not authenticated".to_string(),
            ));
            return;
        }
        match self.backend.update_profile(&update).await {
            Ok(user) => {
                tracing::debug!(user = %user.id, "profile updated");
                self.state.apply(AuthTransition::ProfileUpdated(user));
            }
            Err(err) if err.is_auth() => {
                tracing::warn!(error = %err, "credential rejected, resetting session");
                self.expire_session();
            }
            Err(err) => {
                self.state.apply(AuthTransition::ProfileFailed(
                    err.message()
                        .unwrap_or("Failed to update profile")
                        .to_string(),
                ));
            }
        }
    }
}
