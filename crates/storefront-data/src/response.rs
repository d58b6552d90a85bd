//! Catalog API response body.

use crate::FetchError;
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::Product;

/// Body of `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Products in this page.
    pub products: Vec<Product>,
    /// Products available upstream.
    #[serde(default)]
    pub total: u32,
    /// Offset of this page.
    #[serde(default)]
    pub skip: u32,
    /// Page size that was applied.
    #[serde(default)]
    pub limit: u32,
}

impl CatalogResponse {
    /// Parse a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Check if the upstream catalog has more products than this page.
    pub fn is_truncated(&self) -> bool {
        self.skip as usize + self.products.len() < self.total as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "category": "beauty",
                "price": 9.99,
                "discountPercentage": 7.17,
                "rating": 4.94,
                "stock": 5,
                "tags": ["beauty", "mascara"],
                "brand": "Essence",
                "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.png"
            },
            {
                "id": 16,
                "title": "Apple",
                "category": "groceries",
                "price": 1.99,
                "rating": 4.19,
                "stock": 0
            }
        ],
        "total": 194,
        "skip": 0,
        "limit": 2
    }"#;

    #[test]
    fn test_parse_catalog_page() {
        let response = CatalogResponse::from_slice(BODY.as_bytes()).unwrap();

        assert_eq!(response.products.len(), 2);
        assert_eq!(response.products[0].brand, "Essence");
        assert_eq!(response.products[1].brand, "");
        assert_eq!(response.products[1].stock, 0);
        assert_eq!(response.total, 194);
        assert!(response.is_truncated());
    }

    #[test]
    fn test_missing_products_is_parse_error() {
        let result = CatalogResponse::from_slice(br#"{"total": 0}"#);
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_not_json_is_parse_error() {
        let result = CatalogResponse::from_slice(b"<html>502</html>");
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }
}
