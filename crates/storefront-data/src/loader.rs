//! Catalog sources and the one-shot catalog load.

use async_trait::async_trait;
use storefront_commerce::catalog::Catalog;
use storefront_observability::StructuredLogger;

use crate::{CatalogResponse, FetchError};

/// Where the product list comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the product list along with the upstream total.
    async fn fetch_catalog(&self) -> Result<CatalogResponse, FetchError>;

    /// Short description for logs.
    fn describe(&self) -> String {
        "catalog".to_string()
    }
}

/// What one catalog load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogLoad {
    /// Products placed in the catalog.
    pub loaded: usize,
    /// Products the source reports in total.
    pub available: usize,
}

impl CatalogLoad {
    /// Whether the source holds products the fetch did not return.
    pub fn is_partial(&self) -> bool {
        self.loaded < self.available
    }
}

/// Load the catalog from a source.
///
/// Performs exactly one fetch. On success the catalog is replaced as a
/// whole; a page smaller than the upstream total is kept and logged as a
/// warning. On failure the error is logged and the catalog is left empty and
/// marked failed; nothing is retried.
pub async fn load_catalog(
    source: &dyn CatalogSource,
    catalog: &mut Catalog,
    logger: &StructuredLogger,
) -> CatalogLoad {
    catalog.begin_load();
    logger
        .debug_builder("Fetching catalog")
        .field("source", source.describe())
        .emit();

    match source.fetch_catalog().await {
        Ok(response) => {
            let truncated = response.is_truncated();
            let total = response.total;
            let load = CatalogLoad {
                loaded: response.products.len(),
                available: (total as usize).max(response.products.len()),
            };
            catalog.replace(response.products);

            if truncated {
                logger
                    .warn_builder("Catalog truncated")
                    .field_u64("loaded", load.loaded as u64)
                    .field_u64("total", u64::from(total))
                    .emit();
            }
            logger
                .info_builder("Catalog loaded")
                .field_u64("products", load.loaded as u64)
                .field_bool("complete", !truncated)
                .emit();
            load
        }
        Err(e) => {
            logger
                .error_builder("Error fetching products")
                .field("source", source.describe())
                .field("error", e.to_string())
                .emit();
            catalog.fail(e.to_string());
            CatalogLoad::default()
        }
    }
}
