//! Category and brand facets derived from the product list.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A category offered in the filter sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CategoryOption {
    /// Human-readable label (e.g., "Mens Shirts").
    pub name: String,
    /// Raw category slug (e.g., "mens-shirts").
    pub slug: String,
}

impl CategoryOption {
    /// Build the option for a slug.
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: category_label(&slug),
            slug,
        }
    }
}

/// Turn a category slug into a display label.
///
/// The first hyphen becomes a space and every word gets an uppercase first
/// letter: `"mens-shirts"` becomes `"Mens Shirts"`.
pub fn category_label(slug: &str) -> String {
    let spaced = slug.replacen('-', " ", 1);
    let mut label = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && at_word_start {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = !is_word;
    }
    label
}

/// Unique categories in the order they first appear.
pub fn category_options(products: &[Product]) -> Vec<CategoryOption> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| CategoryOption::from_slug(p.category.clone()))
        .collect()
}

/// Unique, non-empty brands in the order they first appear.
pub fn brands(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.brand.as_str())
        .filter(|b| !b.is_empty() && seen.insert(*b))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("smartphones"), "Smartphones");
        assert_eq!(category_label("mens-shirts"), "Mens Shirts");
        assert_eq!(category_label("home-decoration"), "Home Decoration");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn test_category_label_only_first_hyphen_becomes_space() {
        assert_eq!(category_label("a-b-c"), "A B-C");
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let products = vec![
            product(1, "laptops", "Dell", 500.0, 3.0, 1),
            product(2, "mens-shirts", "Acme", 20.0, 3.0, 1),
            product(3, "laptops", "Apple", 1500.0, 4.0, 1),
        ];

        let options = category_options(&products);
        assert_eq!(
            options,
            vec![
                CategoryOption {
                    name: "Laptops".to_string(),
                    slug: "laptops".to_string()
                },
                CategoryOption {
                    name: "Mens Shirts".to_string(),
                    slug: "mens-shirts".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_brands_skip_empty_and_duplicates() {
        let products = vec![
            product(1, "laptops", "Dell", 500.0, 3.0, 1),
            product(2, "groceries", "", 2.0, 3.0, 1),
            product(3, "laptops", "Apple", 1500.0, 4.0, 1),
            product(4, "laptops", "Dell", 700.0, 4.0, 1),
        ];

        assert_eq!(brands(&products), vec!["Dell", "Apple"]);
    }

    #[test]
    fn test_empty_catalog_has_no_facets() {
        assert!(category_options(&[]).is_empty());
        assert!(brands(&[]).is_empty());
    }
}
