//! Checkout module.
//!
//! Contains the simulated payment flow and the card field input masks.

mod card;
mod payment;

pub use card::{format_card_number, format_cvv, format_expiry, CARD_NUMBER_MAX_LEN};
pub use payment::{PaymentDetails, PaymentFlow, PaymentStep, Receipt, DELIVERY_ESTIMATE};
