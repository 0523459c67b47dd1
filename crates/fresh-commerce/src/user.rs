//! User account types and the role model.

use crate::error::CommerceError;
use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role for authorization.
///
/// Self-service registration always produces a `Buyer`; seller and admin
/// roles are assigned out-of-band by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    #[default]
    Buyer,
    /// Marketplace seller managing their own products and orders.
    Seller,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }

    /// All roles, in ascending privilege order.
    pub fn all() -> [Role; 3] {
        [Role::Buyer, Role::Seller, Role::Admin]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            "admin" => Ok(Role::Admin),
            other => Err(CommerceError::UnknownRole(other.to_string())),
        }
    }
}

/// A user account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Authorization role.
    pub role: Role,
}

impl User {
    /// Check whether this user may manage products (seller dashboard).
    pub fn can_sell(&self) -> bool {
        matches!(self.role, Role::Seller | Role::Admin)
    }

    /// Check whether this user is a platform administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
