//! Client-side sorting and filtering of fetched product lists.
//!
//! Category and search-text filters are forwarded to the backend as query
//! parameters; sorting and price-range filtering are applied afterward to
//! the returned set and never trigger a refetch.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// Filter parameters forwarded verbatim to the backend list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ProductFilters {
    /// Render as query-string pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category".to_string(), category.as_str().to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        pairs
    }
}

/// Sort options for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Sort by price, low to high.
    #[default]
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by average rating, best first.
    RatingDesc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A to Z",
            SortOption::NameDesc => "Name: Z to A",
            SortOption::RatingDesc => "Highest Rated",
        }
    }
}

/// Optional price bounds applied after fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Check whether a price falls within the range.
    pub fn contains(&self, price: f64) -> bool {
        if let Some(min) = self.min {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if price > max {
                return false;
            }
        }
        true
    }
}

/// Sort products in place. Stable: ties preserve prior relative order.
pub fn sort_products(products: &mut [Product], sort: SortOption) {
    match sort {
        SortOption::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOption::NameDesc => products.sort_by(|a, b| b.name.cmp(&a.name)),
        SortOption::RatingDesc => {
            products.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating))
        }
    }
}

/// Keep only products whose price falls within the range.
pub fn filter_by_price(products: Vec<Product>, range: PriceRange) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| range.contains(p.price))
        .collect()
}
