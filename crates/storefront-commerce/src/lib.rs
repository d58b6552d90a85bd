//! Storefront domain logic.
//!
//! This crate holds everything the storefront does that is not I/O:
//!
//! - **Catalog**: Product records from the catalog API, facet derivation, load state
//! - **Cart**: The cart store with merge-by-id quantities and derived totals
//! - **Search**: The client-side filter engine and its filter specification
//! - **Checkout**: Simulated payment flow and card input masking
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let item = LineItem::new(ProductId::new(1), "Phone", Money::usd(10.0), "phone.png");
//! cart.add_or_increment(item.clone());
//! cart.add_or_increment(item);
//!
//! let totals = cart.totals(DEFAULT_TAX_RATE);
//! assert_eq!(totals.grand_total.display(), "$21.60");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        brands, category_label, category_options, Catalog, CatalogStatus, CategoryOption,
        Product, StarRating, StockLevel,
    };

    // Cart
    pub use crate::cart::{compute_totals, Cart, CartChange, CartTotals, LineItem, DEFAULT_TAX_RATE};

    // Checkout
    pub use crate::checkout::{
        format_card_number, format_cvv, format_expiry, PaymentDetails, PaymentFlow, PaymentStep,
        Receipt,
    };

    // Search
    pub use crate::search::{
        facet_counts, filter_products, Facet, FacetValue, FilterSpec, PriceRange, StockStatus,
    };
}
