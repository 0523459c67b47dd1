//! Admin store: platform user management.

use crate::backend::Backend;
use fresh_commerce::prelude::*;
use fresh_data::ApiError;
use std::sync::Arc;

/// Admin slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set when the server rejected the credential (401/403). The view
    /// reads this and calls `AuthStore::expire_session`.
    pub unauthorized: bool,
}

/// State transitions for the admin slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminTransition {
    Pending,
    UsersLoaded(Vec<User>),
    RoleUpdated(User),
    UserDeleted(UserId),
    Failed(String),
    Unauthorized(String),
}

impl AdminState {
    /// Pure reducer for the admin slice.
    pub fn apply(&mut self, transition: AdminTransition) {
        match transition {
            AdminTransition::Pending => {
                self.loading = true;
                self.error = None;
                self.unauthorized = false;
            }
            AdminTransition::UsersLoaded(users) => {
                self.loading = false;
                self.users = users;
            }
            AdminTransition::RoleUpdated(user) => {
                self.loading = false;
                if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
                    *existing = user;
                }
            }
            AdminTransition::UserDeleted(id) => {
                self.loading = false;
                self.users.retain(|u| u.id != id);
            }
            AdminTransition::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            AdminTransition::Unauthorized(message) => {
                self.loading = false;
                self.error = Some(message);
                self.unauthorized = true;
            }
        }
    }

    /// Count of users holding the given role (dashboard stats).
    pub fn count_by_role(&self, role: Role) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }
}

/// Owns the admin slice and drives its operations. Admin-only; the
/// server enforces authorization, the client gates the dashboard route.
pub struct AdminStore<B: Backend> {
    backend: Arc<B>,
    state: AdminState,
}

impl<B: Backend> AdminStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: AdminState::default(),
        }
    }

    /// Current slice state.
    pub fn state(&self) -> &AdminState {
        &self.state
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Map a request failure to a transition. A 401/403 drops the
    /// credential from the transport so the stale token is not
    /// re-attached, and flags the slice for a session reset.
    fn failed(&self, err: &ApiError, fallback: &str) -> AdminTransition {
        let message = err.message().unwrap_or(fallback).to_string();
        if err.is_auth() {
            self.backend.set_credential(None);
            AdminTransition::Unauthorized(message)
        } else {
            AdminTransition::Failed(message)
        }
    }

    /// Fetch all platform users.
    pub async fn fetch_users(&mut self) {
        self.state.apply(AdminTransition::Pending);
        match self.backend.fetch_users().await {
            Ok(users) => self.state.apply(AdminTransition::UsersLoaded(users)),
            Err(err) => {
                let transition = self.failed(&err, "Failed to fetch users");
                self.state.apply(transition);
            }
        }
    }

    /// Change a user's role; the list entry is patched in place.
    pub async fn update_role(&mut self, id: &UserId, role: Role) {
        self.state.apply(AdminTransition::Pending);
        match self.backend.update_user_role(id, role).await {
            Ok(user) => {
                tracing::debug!(user = %user.id, role = %user.role, "user role updated");
                self.state.apply(AdminTransition::RoleUpdated(user));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to update user role");
                self.state.apply(transition);
            }
        }
    }

    /// Delete a user account. Hard removal.
    pub async fn delete_user(&mut self, id: &UserId) {
        self.state.apply(AdminTransition::Pending);
        match self.backend.delete_user(id).await {
            Ok(()) => {
                tracing::debug!(user = %id, "user deleted");
                self.state.apply(AdminTransition::UserDeleted(id.clone()));
            }
            Err(err) => {
                let transition = self.failed(&err, "Failed to delete user");
                self.state.apply(transition);
            }
        }
    }
}
