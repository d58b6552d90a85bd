//! Product catalog module.
//!
//! Contains product records, category/brand facet derivation and the
//! in-memory catalog with its load state.

mod category;
mod product;
mod state;

pub use category::{brands, category_label, category_options, CategoryOption};
pub use product::{
    Product, StarRating, StockLevel, LOW_STOCK_CEILING, NOTABLE_DISCOUNT_PERCENT,
    TOP_RATED_THRESHOLD,
};
pub use state::{Catalog, CatalogStatus};

#[cfg(test)]
pub(crate) use product::fixtures;
