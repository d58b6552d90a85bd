//! Product records as served by the catalog API.

use crate::cart::LineItem;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Discount above which a product card shows a discount badge.
pub const NOTABLE_DISCOUNT_PERCENT: f64 = 15.0;

/// Rating at or above which a product is badged "Top Rated".
pub const TOP_RATED_THRESHOLD: f64 = 4.5;

/// Stock above which a product is simply "In Stock" rather than low.
pub const LOW_STOCK_CEILING: u32 = 10;

/// A product in the catalog.
///
/// Read-only to the storefront. Field names follow the catalog wire format;
/// fields the storefront does not use are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Brand name. Some catalog entries have none.
    #[serde(default)]
    pub brand: String,
    /// Category slug (e.g., "mens-shirts").
    pub category: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Discount percentage already applied to `price` (0-100).
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average rating (0.0-5.0).
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Product description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Unit price as money.
    pub fn unit_price(&self) -> Money {
        Money::usd(self.price)
    }

    /// Price before the discount, if there is one.
    pub fn original_price(&self) -> Option<Money> {
        if self.discount_percentage <= 0.0 || self.discount_percentage >= 100.0 {
            return None;
        }
        Some(Money::usd(
            self.price / (1.0 - self.discount_percentage / 100.0),
        ))
    }

    /// Rounded discount percentage when it is large enough to badge.
    pub fn discount_badge(&self) -> Option<u32> {
        (self.discount_percentage > NOTABLE_DISCOUNT_PERCENT)
            .then(|| self.discount_percentage.round() as u32)
    }

    /// Check if the product earns the "Top Rated" badge.
    pub fn is_top_rated(&self) -> bool {
        self.rating >= TOP_RATED_THRESHOLD
    }

    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock level shown on the product card.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }

    /// Star breakdown for the rating.
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }

    /// Build the cart line item for one unit of this product.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(
            self.id,
            self.title.clone(),
            self.unit_price(),
            self.thumbnail.clone(),
        )
    }
}

/// Stock level classification for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    /// More than `LOW_STOCK_CEILING` units.
    InStock,
    /// Between one and `LOW_STOCK_CEILING` units.
    LowStock,
    /// No units.
    OutOfStock,
}

impl StockLevel {
    /// Classify a stock count.
    pub fn from_stock(stock: u32) -> Self {
        if stock > LOW_STOCK_CEILING {
            StockLevel::InStock
        } else if stock > 0 {
            StockLevel::LowStock
        } else {
            StockLevel::OutOfStock
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::LowStock => "Low Stock",
            StockLevel::OutOfStock => "Out of Stock",
        }
    }
}

/// A five-star rating split into full, half and empty stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Maximum number of stars.
    pub const MAX: u8 = 5;

    /// Split a rating into stars. A fractional part of one half or more
    /// earns a half star.
    pub fn from_rating(rating: f64) -> Self {
        let clamped = rating.clamp(0.0, f64::from(Self::MAX));
        let full = clamped.floor() as u8;
        let half = full < Self::MAX && clamped.fract() >= 0.5;
        let empty = Self::MAX - full - u8::from(half);
        Self { full, half, empty }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a product with the fields the filter engine looks at.
    pub fn product(
        id: u64,
        category: &str,
        brand: &str,
        price: f64,
        rating: f64,
        stock: u32,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            discount_percentage: 0.0,
            rating,
            stock,
            thumbnail: format!("https://cdn.example.com/{}.png", id),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/1/thumbnail.png"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.brand, "Essence");
        assert_eq!(p.discount_percentage, 7.17);
        assert_eq!(p.stock, 5);
    }

    #[test]
    fn test_missing_brand_defaults_to_empty() {
        let json = r#"{"id": 2, "title": "Apple", "category": "groceries", "price": 1.99}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.brand, "");
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn test_original_price() {
        let mut p = product(1, "beauty", "Essence", 80.0, 4.0, 3);
        assert_eq!(p.original_price(), None);

        p.discount_percentage = 20.0;
        let original = p.original_price().unwrap();
        assert!((original.amount - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_badges() {
        let mut p = product(1, "beauty", "Essence", 10.0, 4.5, 3);
        assert!(p.is_top_rated());
        assert_eq!(p.discount_badge(), None);

        p.discount_percentage = 15.0;
        assert_eq!(p.discount_badge(), None);

        p.discount_percentage = 17.6;
        assert_eq!(p.discount_badge(), Some(18));

        p.rating = 4.49;
        assert!(!p.is_top_rated());
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(StockLevel::from_stock(11), StockLevel::InStock);
        assert_eq!(StockLevel::from_stock(10), StockLevel::LowStock);
        assert_eq!(StockLevel::from_stock(1), StockLevel::LowStock);
        assert_eq!(StockLevel::from_stock(0), StockLevel::OutOfStock);
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(
            StarRating::from_rating(4.7),
            StarRating { full: 4, half: true, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(3.2),
            StarRating { full: 3, half: false, empty: 2 }
        );
        assert_eq!(
            StarRating::from_rating(5.0),
            StarRating { full: 5, half: false, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(0.0),
            StarRating { full: 0, half: false, empty: 5 }
        );
    }

    #[test]
    fn test_to_line_item() {
        let p = product(9, "laptops", "Dell", 500.0, 3.0, 2);
        let item = p.to_line_item();
        assert_eq!(item.id, ProductId::new(9));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, Money::usd(500.0));
        assert_eq!(item.name, "Product 9");
    }
}
