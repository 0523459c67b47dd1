//! Resource paths for the FreshMart REST API.
//!
//! Paths are relative to the client's base URL (which carries the `/api`
//! prefix). Kept in one place so the backend contract is auditable.

/// Auth endpoints.
pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const CURRENT_USER: &str = "/auth/me";
    pub const PROFILE: &str = "/auth/profile";
}

/// Product endpoints.
pub mod products {
    pub const LIST: &str = "/products";
    pub const SELLER_MINE: &str = "/products/seller/me";

    pub fn detail(id: &str) -> String {
        format!("/products/{id}")
    }

    pub fn reviews(id: &str) -> String {
        format!("/products/{id}/reviews")
    }
}

/// Cart endpoints. Mutations return the full updated cart.
pub mod cart {
    pub const GET: &str = "/cart";
    pub const ITEMS: &str = "/cart/items";

    pub fn item(product_id: &str) -> String {
        format!("/cart/items/{product_id}")
    }
}

/// Order endpoints.
pub mod orders {
    pub const LIST_MINE: &str = "/orders";
    pub const LIST_ALL: &str = "/admin/orders";
    pub const SELLER_MINE: &str = "/orders/seller/me";

    pub fn detail(id: &str) -> String {
        format!("/orders/{id}")
    }

    pub fn status(id: &str) -> String {
        format!("/orders/{id}/status")
    }
}

/// Admin user-management endpoints.
pub mod admin {
    pub const USERS: &str = "/admin/users";

    pub fn user(id: &str) -> String {
        format!("/admin/users/{id}")
    }

    pub fn user_role(id: &str) -> String {
        format!("/admin/users/{id}/role")
    }
}
