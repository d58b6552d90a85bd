//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart and filter operations are total and never produce these; they come
/// from the opt-in stock check and the checkout flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Adding would exceed the units in stock.
    #[error("Only {available} of {product_id} in stock, cart would hold {requested}")]
    StockLimitReached {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// Checkout was started with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A required payment field was left blank.
    #[error("Missing payment field: {0}")]
    MissingPaymentField(&'static str),

    /// Invalid payment state transition.
    #[error("Invalid payment transition from {from} to {to}")]
    InvalidPaymentTransition { from: String, to: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
