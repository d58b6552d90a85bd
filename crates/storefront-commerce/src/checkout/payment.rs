//! Simulated payment flow.

use crate::cart::{Cart, CartTotals};
use crate::checkout::card::{format_card_number, format_cvv, format_expiry};
use crate::ids::OrderId;
use crate::money::Money;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery promise printed on every receipt.
pub const DELIVERY_ESTIMATE: &str = "2-3 business days";

/// Steps in the payment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStep {
    /// Card details are being entered.
    #[default]
    Details,
    /// The payment has been submitted and is being processed.
    Processing,
    /// Payment succeeded.
    Paid,
}

impl PaymentStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStep::Details => "details",
            PaymentStep::Processing => "processing",
            PaymentStep::Paid => "paid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStep::Details => "Payment Details",
            PaymentStep::Processing => "Processing",
            PaymentStep::Paid => "Payment Successful",
        }
    }
}

/// Card details as entered, with the input masks applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn set_cardholder_name(&mut self, name: impl Into<String>) {
        self.cardholder_name = name.into();
    }

    pub fn set_card_number(&mut self, input: &str) {
        self.card_number = format_card_number(input);
    }

    pub fn set_expiry(&mut self, input: &str) {
        self.expiry = format_expiry(input);
    }

    pub fn set_cvv(&mut self, input: &str) {
        self.cvv = format_cvv(input);
    }

    /// First required field that is still blank.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("cardholder name", &self.cardholder_name),
            ("card number", &self.card_number),
            ("expiry date", &self.expiry),
            ("cvv", &self.cvv),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// Check if every field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// Confirmation issued when a payment completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Six-digit order number.
    pub order_id: OrderId,
    /// Amount charged.
    pub amount: Money,
    /// Delivery promise shown to the shopper.
    pub delivery_estimate: String,
    /// When the payment completed.
    pub paid_at: DateTime<Utc>,
}

/// Payment for one cart, from card entry to receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentFlow {
    amount: Money,
    step: PaymentStep,
    /// Card details. Editable until the flow is submitted.
    pub details: PaymentDetails,
    receipt: Option<Receipt>,
}

impl PaymentFlow {
    /// Open a flow charging `amount`.
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            step: PaymentStep::Details,
            details: PaymentDetails::default(),
            receipt: None,
        }
    }

    /// Open a flow for a cart's grand total.
    pub fn for_cart(cart: &Cart, tax_rate: f64) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self::from_totals(&cart.totals(tax_rate)))
    }

    /// Open a flow for already computed totals.
    pub fn from_totals(totals: &CartTotals) -> Self {
        Self::new(totals.grand_total)
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn step(&self) -> PaymentStep {
        self.step
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn is_paid(&self) -> bool {
        self.step == PaymentStep::Paid
    }

    /// Label for the submit button.
    pub fn pay_label(&self) -> String {
        match self.step {
            PaymentStep::Details => format!("Pay {}", self.amount.display()),
            PaymentStep::Processing => "Processing...".to_string(),
            PaymentStep::Paid => "Paid".to_string(),
        }
    }

    /// Submit the card details.
    pub fn submit(&mut self) -> Result<(), CommerceError> {
        if self.step != PaymentStep::Details {
            return Err(self.invalid_transition(PaymentStep::Processing));
        }
        if let Some(field) = self.details.missing_field() {
            return Err(CommerceError::MissingPaymentField(field));
        }
        self.step = PaymentStep::Processing;
        Ok(())
    }

    /// Finish processing and issue the receipt.
    pub fn complete(&mut self) -> Result<&Receipt, CommerceError> {
        if self.step != PaymentStep::Processing {
            return Err(self.invalid_transition(PaymentStep::Paid));
        }
        self.step = PaymentStep::Paid;
        let receipt = self.receipt.insert(Receipt {
            order_id: OrderId::generate(),
            amount: self.amount,
            delivery_estimate: DELIVERY_ESTIMATE.to_string(),
            paid_at: Utc::now(),
        });
        Ok(receipt)
    }

    fn invalid_transition(&self, to: PaymentStep) -> CommerceError {
        CommerceError::InvalidPaymentTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}
