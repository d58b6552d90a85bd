//! In-memory catalog and its load state.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Where the catalog is in its single load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CatalogStatus {
    /// No load has been started.
    #[default]
    Idle,
    /// The fetch is outstanding.
    Loading,
    /// The fetch succeeded and the products are in place.
    Ready,
    /// The fetch failed; the catalog stays empty.
    Failed(String),
}

impl CatalogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Idle => "idle",
            CatalogStatus::Loading => "loading",
            CatalogStatus::Ready => "ready",
            CatalogStatus::Failed(_) => "failed",
        }
    }
}

/// The product list held for the whole session.
///
/// Replaced as a whole when the fetch completes; never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    status: CatalogStatus,
}

impl Catalog {
    /// Create an empty catalog that has not started loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the fetch as started. The product list is empty while loading.
    pub fn begin_load(&mut self) {
        self.products.clear();
        self.status = CatalogStatus::Loading;
    }

    /// Swap in the fetched products.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.status = CatalogStatus::Ready;
    }

    /// Record a failed fetch. The catalog is left empty.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.products.clear();
        self.status = CatalogStatus::Failed(reason.into());
    }

    /// Current products (empty unless ready).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current load status.
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Check if the loading indicator should show.
    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if there are no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    #[test]
    fn test_load_lifecycle() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.status(), &CatalogStatus::Idle);

        catalog.begin_load();
        assert!(catalog.is_loading());
        assert!(catalog.is_empty());

        catalog.replace(vec![product(1, "laptops", "Dell", 500.0, 3.0, 0)]);
        assert!(!catalog.is_loading());
        assert_eq!(catalog.status(), &CatalogStatus::Ready);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_failed_load_leaves_catalog_empty() {
        let mut catalog = Catalog::new();
        catalog.begin_load();
        catalog.fail("connection refused");

        assert!(catalog.is_empty());
        assert!(!catalog.is_loading());
        assert_eq!(catalog.status().as_str(), "failed");
    }

    #[test]
    fn test_replace_is_full_replacement() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![
            product(1, "laptops", "Dell", 500.0, 3.0, 0),
            product(2, "laptops", "Dell", 600.0, 3.0, 0),
        ]);
        catalog.replace(vec![product(3, "beauty", "Essence", 9.99, 4.9, 5)]);

        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3]);
    }
}
