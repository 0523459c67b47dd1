//! View-edge validation.
//!
//! These checks run before an operation is dispatched; a failure here
//! never reaches a store, so store errors are reserved for server-side
//! failures. The stores deliberately do not duplicate these bounds (the
//! server re-validates everything anyway).

use crate::backend::ProfileUpdate;
use fresh_commerce::prelude::*;
use thiserror::Error;

/// A per-field validation message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// One or more fields failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", .fields.iter().map(|f| f.field).collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Message for a given field, if it failed.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Validate a cart quantity against the product's stock.
///
/// Rejects `quantity <= 0` and `quantity > stock`; called before
/// `add_item`/`update_item` so the store state stays unchanged on bad
/// input.
pub fn validate_quantity(quantity: i64, stock: i64) -> Result<(), CommerceError> {
    if quantity <= 0 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    if quantity > stock {
        return Err(CommerceError::InsufficientStock {
            requested: quantity,
            available: stock,
        });
    }
    Ok(())
}

/// Validate login form fields.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.push("email", "Email is invalid");
    }
    if password.is_empty() {
        errors.push("password", "Password is required");
    }
    errors.into_result()
}

/// Validate registration form fields.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    if email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.push("email", "Email is invalid");
    }
    if password.len() < 6 {
        errors.push("password", "Password must be at least 6 characters");
    }
    if confirm_password != password {
        errors.push("confirmPassword", "Passwords do not match");
    }
    errors.into_result()
}

/// Validate a shipping address: all fields required, 6-digit pincode,
/// 10-digit phone.
pub fn validate_shipping_address(address: &ShippingAddress) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if address.street.trim().is_empty() {
        errors.push("street", "Street address is required");
    }
    if address.city.trim().is_empty() {
        errors.push("city", "City is required");
    }
    if address.state.trim().is_empty() {
        errors.push("state", "State is required");
    }
    if address.pincode.trim().is_empty() {
        errors.push("pincode", "Pincode is required");
    } else if address.pincode.len() != 6 || !address.pincode.chars().all(|c| c.is_ascii_digit()) {
        errors.push("pincode", "Pincode must be 6 digits");
    }
    if address.phone.trim().is_empty() {
        errors.push("phone", "Phone number is required");
    } else if address.phone.len() != 10 || !address.phone.chars().all(|c| c.is_ascii_digit()) {
        errors.push("phone", "Phone number must be 10 digits");
    }
    errors.into_result()
}

/// Validate a review: rating 1..=5 and a non-empty comment.
pub fn validate_review(review: &ReviewInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !(1..=5).contains(&review.rating) {
        errors.push("rating", "Rating must be between 1 and 5");
    }
    if review.comment.trim().is_empty() {
        errors.push("comment", "Comment is required");
    }
    errors.into_result()
}

/// Validate a profile update: a password change requires the current
/// password.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if update.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    if update.email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !looks_like_email(&update.email) {
        errors.push("email", "Email is invalid");
    }
    if let Some(ref password) = update.password {
        if password.len() < 6 {
            errors.push("password", "Password must be at least 6 characters");
        }
        if update
            .current_password
            .as_deref()
            .unwrap_or("")
            .is_empty()
        {
            errors.push(
                "currentPassword",
                "Current password is required to set new password",
            );
        }
    }
    errors.into_result()
}
