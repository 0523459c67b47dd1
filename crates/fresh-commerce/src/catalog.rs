//! Product catalog types: products, categories, units, reviews.

use crate::ids::{ProductId, ReviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Grocery category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    /// Packaged and processed foods.
    Packaged,
    Snacks,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Dairy => "dairy",
            Category::Packaged => "packaged",
            Category::Snacks => "snacks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::Packaged => "Packaged Goods",
            Category::Snacks => "Snacks",
        }
    }

    /// All categories, in storefront display order.
    pub fn all() -> [Category; 5] {
        [
            Category::Fruits,
            Category::Vegetables,
            Category::Dairy,
            Category::Packaged,
            Category::Snacks,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit a product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    Piece,
    Dozen,
    Pack,
    Liter,
    Ml,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Piece => "piece",
            Unit::Dozen => "dozen",
            Unit::Pack => "pack",
            Unit::Liter => "liter",
            Unit::Ml => "ml",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Kg => "Kilogram (kg)",
            Unit::G => "Gram (g)",
            Unit::Piece => "Piece",
            Unit::Dozen => "Dozen",
            Unit::Pack => "Pack",
            Unit::Liter => "Liter (L)",
            Unit::Ml => "Milliliter (ml)",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-form nutrition facts (e.g., "calories" -> "52 kcal").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Nutrition(pub BTreeMap<String, String>);

/// A customer review on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    /// Reviewing user.
    pub user: UserId,
    /// Reviewer display name, denormalized for display.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Input payload for submitting a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewInput {
    pub rating: i32,
    pub title: String,
    pub comment: String,
}

/// A product in the catalog, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price in currency units. Always positive.
    pub price: f64,
    /// Grocery category.
    pub category: Category,
    /// Unit the price applies to.
    pub unit: Unit,
    /// Units in stock. Never negative.
    pub stock: i64,
    /// Primary image URL.
    pub image_url: String,
    /// The seller who listed this product.
    pub seller: UserId,
    /// Average review rating (0.0 when unreviewed).
    #[serde(default)]
    pub average_rating: f64,
    /// Customer reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Optional nutrition facts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Product {
    /// Check whether the product can currently be purchased.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Input payload for creating or updating a product.
///
/// Mirrors [`Product`] minus the server-assigned fields (id, seller,
/// ratings, reviews).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub unit: Unit,
    pub stock: i64,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Apple".to_string(),
            description: "Crisp red apples".to_string(),
            price: 120.0,
            category: Category::Fruits,
            unit: Unit::Kg,
            stock: 25,
            image_url: "https://img.example.com/apple.jpg".to_string(),
            seller: UserId::new("s1"),
            average_rating: 4.2,
            reviews: Vec::new(),
            nutrition: None,
        }
    }

    #[test]
    fn test_product_wire_shape() {
        let json = serde_json::to_value(apple()).unwrap();
        assert_eq!(json["category"], "fruits");
        assert_eq!(json["unit"], "kg");
        assert_eq!(json["imageUrl"], "https://img.example.com/apple.jpg");
        assert_eq!(json["averageRating"], 4.2);
        assert!(json.get("nutrition").is_none());
    }

    #[test]
    fn test_product_defaults_on_sparse_payload() {
        // List endpoints may omit reviews/rating for lean payloads.
        let sparse = serde_json::json!({
            "id": "p2",
            "name": "Milk",
            "description": "Full cream",
            "price": 60.0,
            "category": "dairy",
            "unit": "liter",
            "stock": 0,
            "imageUrl": "https://img.example.com/milk.jpg",
            "seller": "s2"
        });
        let product: Product = serde_json::from_value(sparse).unwrap();
        assert_eq!(product.average_rating, 0.0);
        assert!(product.reviews.is_empty());
        assert!(!product.in_stock());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Packaged.display_name(), "Packaged Goods");
        assert_eq!(Category::Packaged.as_str(), "packaged");
    }
}
