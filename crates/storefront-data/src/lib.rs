//! Catalog data access for the storefront.
//!
//! Fetches the product list from the catalog API and loads it into a
//! [`Catalog`](storefront_commerce::catalog::Catalog).
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::catalog::Catalog;
//! use storefront_data::{load_catalog, CatalogClient};
//!
//! let client = CatalogClient::builder()
//!     .base_url("https://dummyjson.com")
//!     .limit(100)
//!     .build()?;
//!
//! let mut catalog = Catalog::new();
//! load_catalog(&client, &mut catalog, &logger).await;
//! ```

mod client;
mod error;
mod loader;
mod response;

pub use client::{CatalogClient, CatalogClientBuilder, DEFAULT_BASE_URL, DEFAULT_LIMIT};
pub use error::FetchError;
pub use loader::{load_catalog, CatalogLoad, CatalogSource};
pub use response::CatalogResponse;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{load_catalog, CatalogClient, CatalogSource, FetchError};
}
