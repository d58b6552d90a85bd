//! Cart pricing calculations.

use crate::cart::LineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax applied at checkout.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Pricing breakdown for a cart.
///
/// Values keep full precision; round only when displaying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Money,
    /// Shipping cost. Always free.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus shipping plus tax.
    pub grand_total: Money,
    /// Rate the tax was computed with.
    pub tax_rate: f64,
}

impl CartTotals {
    /// Label for the shipping row.
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "FREE".to_string()
        } else {
            self.shipping.display()
        }
    }

    /// Tax rate as a whole-number percentage for labels.
    pub fn tax_percent(&self) -> f64 {
        self.tax_rate * 100.0
    }
}

/// Compute subtotal, tax and grand total for a set of lines.
///
/// Total over any set of lines; an empty set totals to zero dollars.
pub fn compute_totals(items: &[LineItem], tax_rate: f64) -> CartTotals {
    let line_totals: Vec<Money> = items.iter().map(LineItem::line_total).collect();
    let subtotal = Money::sum(line_totals.iter());
    let shipping = Money::zero();
    let tax = subtotal.multiply_rate(tax_rate);
    let grand_total = subtotal + shipping + tax;

    CartTotals {
        subtotal,
        shipping,
        tax,
        grand_total,
        tax_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn line(id: u64, price: f64, quantity: u32) -> LineItem {
        LineItem::new(ProductId::new(id), "item", Money::usd(price), "").with_quantity(quantity)
    }

    #[test]
    fn test_empty_totals() {
        let totals = compute_totals(&[], DEFAULT_TAX_RATE);
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_totals() {
        let items = vec![line(1, 999.0, 1), line(2, 12.5, 2)];
        let totals = compute_totals(&items, DEFAULT_TAX_RATE);

        assert!((totals.subtotal.amount - 1024.0).abs() < 1e-9);
        assert!((totals.tax.amount - 81.92).abs() < 1e-9);
        assert!((totals.grand_total.amount - 1105.92).abs() < 1e-9);
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.shipping_label(), "FREE");
    }

    #[test]
    fn test_no_rounding_before_display() {
        let totals = compute_totals(&[line(1, 0.99, 1)], DEFAULT_TAX_RATE);
        // 0.0792 is kept, display rounds it
        assert!((totals.tax.amount - 0.0792).abs() < 1e-12);
        assert_eq!(totals.tax.display(), "$0.08");
    }

    #[test]
    fn test_totals_over_many_lines_show_dollars_and_cents() {
        let items: Vec<LineItem> = (1..=5).map(|id| line(id, 9.99, 1)).collect();
        let totals = compute_totals(&items[..1], DEFAULT_TAX_RATE);
        assert_eq!(totals.subtotal.display(), "$9.99");

        let totals = compute_totals(&items, DEFAULT_TAX_RATE);
        assert_eq!(totals.subtotal.display(), "$49.95");
        assert_eq!(totals.tax.display(), "$4.00");
        assert_eq!(totals.grand_total.display(), "$53.95");
    }

    #[test]
    fn test_tax_percent() {
        let totals = compute_totals(&[], DEFAULT_TAX_RATE);
        assert!((totals.tax_percent() - 8.0).abs() < 1e-9);
    }
}
