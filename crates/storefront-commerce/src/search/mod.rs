//! Search module.
//!
//! Contains the filter specification, the filter engine and facet counts
//! for the filter sidebar.

mod facets;
mod filter;

pub use facets::{facet_counts, Facet, FacetValue};
pub use filter::{filter_products, FilterSpec, PriceRange, StockStatus, RATING_OPTIONS};
