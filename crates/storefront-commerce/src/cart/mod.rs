//! Shopping cart module.
//!
//! Contains the cart store, its line items and the derived totals.

mod cart;
mod pricing;

pub use cart::{Cart, CartChange, LineItem};
pub use pricing::{compute_totals, CartTotals, DEFAULT_TAX_RATE};
