//! Money type for representing monetary values.
//!
//! Every price in the catalog is in US dollars. Amounts are kept in dollars
//! exactly as the catalog reports them; arithmetic never rounds and only
//! `display` rounds, to cents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Symbol printed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Decimal places shown when displaying an amount.
pub const DISPLAY_DECIMALS: usize = 2;

/// A dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in dollars.
    pub amount: f64,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Shorthand for a dollar amount; same as `new`.
    pub fn usd(amount: f64) -> Self {
        Self::new(amount)
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(0.0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{:.prec$}", self.amount, prec = DISPLAY_DECIMALS)
    }

    /// Multiply by a whole quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(self.amount * f64::from(quantity))
    }

    /// Multiply by a rate (e.g., 0.08 for 8% tax). No rounding.
    pub fn multiply_rate(&self, rate: f64) -> Money {
        Money::new(self.amount * rate)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount + other.amount)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(49.99).display(), "$49.99");
        assert_eq!(Money::usd(1.6).display(), "$1.60");
        assert_eq!(Money::usd(100.0).display(), "$100.00");
        assert_eq!(Money::usd(9.99).to_string(), "$9.99");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::usd(10.0) + Money::usd(5.5);
        assert_eq!(c.amount, 15.5);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::usd(9.99) * 3;
        assert!((m.amount - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_rate_keeps_full_precision() {
        // 8% of 0.05 is 0.004, which must not be rounded to a cent
        let tax = Money::usd(0.05).multiply_rate(0.08);
        assert!((tax.amount - 0.004).abs() < 1e-12);
        assert_eq!(tax.display(), "$0.00");
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::usd(1.0), Money::usd(2.0), Money::usd(3.5)];
        assert_eq!(Money::sum(values.iter()).amount, 6.5);
        assert!(Money::sum([].iter()).is_zero());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Money::usd(9.99)).unwrap(), "9.99");
    }
}
