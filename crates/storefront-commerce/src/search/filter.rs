//! Client-side catalog filtering.
//!
//! A `FilterSpec` holds one constraint per facet. A product matches when it
//! passes every facet; an empty category or brand set, a zero rating and
//! `StockStatus::Any` place no constraint.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Rating thresholds offered as "N & up".
pub const RATING_OPTIONS: [u8; 4] = [4, 3, 2, 1];

/// Availability constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Any stock level.
    #[default]
    #[serde(alias = "all")]
    Any,
    /// At least one unit.
    InStock,
    /// No units.
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::Any,
        StockStatus::InStock,
        StockStatus::OutOfStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Any => "any",
            StockStatus::InStock => "in-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::Any => "All Products",
            StockStatus::InStock => "In Stock Only",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "any" | "all" => Some(StockStatus::Any),
            "in-stock" => Some(StockStatus::InStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// Check a stock count against this constraint.
    pub fn matches(&self, stock: u32) -> bool {
        match self {
            StockStatus::Any => true,
            StockStatus::InStock => stock > 0,
            StockStatus::OutOfStock => stock == 0,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price bounds in dollars.
///
/// Callers keep `min <= max`; `with_min` and `with_max` do that by dragging
/// the other bound along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Create a range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that every non-negative price falls in.
    pub fn unbounded() -> Self {
        Self::new(0.0, f64::MAX)
    }

    /// Move the lower bound, raising the upper bound if it falls below.
    pub fn with_min(self, min: f64) -> Self {
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Move the upper bound, lowering the lower bound if it rises above.
    pub fn with_max(self, max: f64) -> Self {
        Self {
            min: self.min.min(max),
            max,
        }
    }

    /// Check if a price lies inside the bounds.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Check if this range excludes no non-negative price.
    pub fn is_unbounded(&self) -> bool {
        self.min <= 0.0 && self.max == f64::MAX
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The facet constraints applied to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSpec {
    /// Selected category names (labels or slugs).
    pub categories: BTreeSet<String>,
    /// Selected brands, matched exactly.
    pub brands: BTreeSet<String>,
    /// Price bounds.
    pub price_range: PriceRange,
    /// Minimum rating; zero means no constraint.
    pub min_rating: f64,
    /// Availability.
    pub stock_status: StockStatus,
}

impl FilterSpec {
    /// A spec that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Add a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Set the minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Set the availability constraint.
    pub fn with_stock_status(mut self, status: StockStatus) -> Self {
        self.stock_status = status;
        self
    }

    /// Select a category, or deselect it if already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Select a brand, or deselect it if already selected.
    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
    }

    /// Select a rating threshold; picking the current one again clears it.
    pub fn select_rating(&mut self, rating: f64) {
        self.min_rating = if self.min_rating == rating { 0.0 } else { rating };
    }

    /// Reset every facet.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if no facet constrains anything.
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty()
            && self.brands.is_empty()
            && self.price_range.is_unbounded()
            && self.min_rating <= 0.0
            && self.stock_status == StockStatus::Any
    }

    /// Check the category facet.
    pub fn matches_category(&self, product: &Product) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        let category = product.category.to_lowercase();
        self.categories
            .iter()
            .any(|selected| category == normalize_category(selected))
    }

    /// Check the brand facet.
    pub fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand)
    }

    /// Check the price facet.
    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    /// Check the rating facet.
    pub fn matches_rating(&self, product: &Product) -> bool {
        product.rating >= self.min_rating
    }

    /// Check the availability facet.
    pub fn matches_stock(&self, product: &Product) -> bool {
        self.stock_status.matches(product.stock)
    }

    /// Check every facet.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_brand(product)
            && self.matches_price(product)
            && self.matches_rating(product)
            && self.matches_stock(product)
    }
}

/// Lowercase a category name and turn its spaces into hyphens, so that a
/// label like "Mens Shirts" compares equal to the slug "mens-shirts".
fn normalize_category(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Products matching the spec, in input order. The input is not modified.
pub fn filter_products(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    products
        .iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect()
}
