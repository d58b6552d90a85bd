//! Facet values and counts for the filter sidebar.

use crate::catalog::{brands, category_options, Product};
use crate::search::FilterSpec;
use serde::{Deserialize, Serialize};

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Categories", "Brands").
    pub name: String,
    /// Product field this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new facet without values.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Values currently selected.
    pub fn selected(&self) -> impl Iterator<Item = &FacetValue> {
        self.values.iter().filter(|v| v.selected)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value as it is put into a `FilterSpec`.
    pub value: String,
    /// Number of catalog products with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

/// Category and brand facets over the full catalog.
///
/// Category values are display labels, which is what the sidebar puts into
/// the spec. Counts are over the whole catalog, not the filtered view.
pub fn facet_counts(products: &[Product], spec: &FilterSpec) -> Vec<Facet> {
    let mut categories = Facet::terms("Categories", "category");
    for option in category_options(products) {
        let count = products.iter().filter(|p| p.category == option.slug).count();
        let selected =
            spec.categories.contains(&option.name) || spec.categories.contains(&option.slug);
        categories.add_value(option.name, count, selected);
    }

    let mut brand_facet = Facet::terms("Brands", "brand");
    for brand in brands(products) {
        let count = products.iter().filter(|p| p.brand == brand).count();
        let selected = spec.brands.contains(&brand);
        brand_facet.add_value(brand, count, selected);
    }

    vec![categories, brand_facet]
}
