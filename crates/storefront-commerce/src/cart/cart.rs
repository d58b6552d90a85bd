//! Cart and line item types.

use crate::cart::{compute_totals, CartTotals};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartChange {
    /// A new line was appended with this quantity.
    Added { quantity: u32 },
    /// An existing line grew to this quantity.
    Incremented { quantity: u32 },
    /// An existing line shrank to this quantity.
    Decremented { quantity: u32 },
    /// The line left the cart.
    Removed,
    /// Nothing matched, or there was nothing to do.
    Unchanged,
}

/// A shopping cart.
///
/// Lines keep the order in which their product was first added, and there is
/// at most one line per product. Every line has a quantity of at least one.
/// The cart is only changed through its methods; readers get `&[LineItem]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging into the existing line for the same product.
    ///
    /// No stock limit is applied here; see `try_add_within_stock`. A
    /// requested quantity of zero changes nothing.
    pub fn add_or_increment(&mut self, item: LineItem) -> CartChange {
        if item.quantity == 0 {
            return CartChange::Unchanged;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            return CartChange::Incremented {
                quantity: existing.quantity,
            };
        }

        let quantity = item.quantity;
        self.items.push(item);
        CartChange::Added { quantity }
    }

    /// Add an item unless the line would then hold more than `available` units.
    pub fn try_add_within_stock(
        &mut self,
        item: LineItem,
        available: u32,
    ) -> Result<CartChange, CommerceError> {
        let requested = self.quantity_of(&item.id).saturating_add(item.quantity);
        if item.quantity > 0 && requested > available {
            return Err(CommerceError::StockLimitReached {
                product_id: item.id.to_string(),
                requested,
                available,
            });
        }
        Ok(self.add_or_increment(item))
    }

    /// Take one unit off a line, removing the line when its last unit goes.
    pub fn decrement_or_remove(&mut self, id: &ProductId) -> CartChange {
        let Some(index) = self.items.iter().position(|i| &i.id == id) else {
            return CartChange::Unchanged;
        };

        let item = &mut self.items[index];
        if item.quantity > 1 {
            item.quantity -= 1;
            CartChange::Decremented {
                quantity: item.quantity,
            }
        } else {
            self.items.remove(index);
            CartChange::Removed
        }
    }

    /// Remove a line whatever its quantity.
    pub fn remove_entirely(&mut self, id: &ProductId) -> CartChange {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() < len_before {
            CartChange::Removed
        } else {
            CartChange::Unchanged
        }
    }

    /// Quantity held for a product, zero when it is not in the cart.
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.get_item(id).map(|i| i.quantity).unwrap_or(0)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product ID.
    pub fn get_item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Snapshot of the lines in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Calculate subtotal, tax and grand total.
    pub fn totals(&self, tax_rate: f64) -> CartTotals {
        compute_totals(&self.items, tax_rate)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product this line is for.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price when the product was added.
    pub unit_price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item for a single unit.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            image: image.into(),
            quantity: 1,
        }
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: u64, price: f64) -> LineItem {
        LineItem::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::usd(price),
            format!("{}.png", id),
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_twice_merges() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_or_increment(item(1, 10.0)),
            CartChange::Added { quantity: 1 }
        );
        assert_eq!(
            cart.add_or_increment(item(1, 10.0)),
            CartChange::Incremented { quantity: 2 }
        );

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new(1)), 2);

        let totals = cart.totals(0.08);
        assert!((totals.subtotal.amount - 20.0).abs() < 1e-9);
        assert!((totals.tax.amount - 1.6).abs() < 1e-9);
        assert!((totals.grand_total.amount - 21.6).abs() < 1e-9);
        assert_eq!(totals.subtotal.display(), "$20.00");
        assert_eq!(totals.tax.display(), "$1.60");
        assert_eq!(totals.grand_total.display(), "$21.60");
    }

    #[test]
    fn test_add_with_quantity() {
        let mut cart = Cart::new();
        cart.add_or_increment(item(1, 10.0).with_quantity(3));
        cart.add_or_increment(item(1, 10.0).with_quantity(2));
        assert_eq!(cart.quantity_of(&ProductId::new(1)), 5);
    }

    #[test]
    fn test_zero_quantity_add_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_or_increment(item(1, 10.0).with_quantity(0)),
            CartChange::Unchanged
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut cart = Cart::new();
        cart.add_or_increment(item(3, 1.0));
        cart.add_or_increment(item(1, 1.0));
        cart.add_or_increment(item(2, 1.0));
        cart.add_or_increment(item(3, 1.0));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decrement_down_to_removal() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        cart.add_or_increment(item(1, 10.0).with_quantity(3));

        assert_eq!(
            cart.decrement_or_remove(&id),
            CartChange::Decremented { quantity: 2 }
        );
        assert_eq!(
            cart.decrement_or_remove(&id),
            CartChange::Decremented { quantity: 1 }
        );
        assert_eq!(cart.decrement_or_remove(&id), CartChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_increment(item(1, 10.0));
        assert_eq!(
            cart.decrement_or_remove(&ProductId::new(99)),
            CartChange::Unchanged
        );
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_entirely() {
        let mut cart = Cart::new();
        cart.add_or_increment(item(1, 10.0).with_quantity(7));
        cart.add_or_increment(item(2, 5.0));

        assert_eq!(cart.remove_entirely(&ProductId::new(1)), CartChange::Removed);
        assert_eq!(
            cart.remove_entirely(&ProductId::new(1)),
            CartChange::Unchanged
        );
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_or_increment(item(1, 10.0).with_quantity(2));
        cart.add_or_increment(item(2, 20.0).with_quantity(3));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_stock_limit() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        assert!(cart.try_add_within_stock(item(1, 10.0), 2).is_ok());
        assert!(cart.try_add_within_stock(item(1, 10.0), 2).is_ok());

        let err = cart.try_add_within_stock(item(1, 10.0), 2).unwrap_err();
        assert_eq!(
            err,
            CommerceError::StockLimitReached {
                product_id: "1".to_string(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(cart.quantity_of(&id), 2);
    }

    #[test]
    fn test_stock_limit_out_of_stock() {
        let mut cart = Cart::new();
        assert!(cart.try_add_within_stock(item(1, 10.0), 0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_total() {
        let line = item(1, 2.5).with_quantity(4);
        assert_eq!(line.line_total().amount, 10.0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64, u32),
        Decrement(u64),
        Remove(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..5, 1u32..4).prop_map(|(id, qty)| Op::Add(id, qty)),
            (0u64..5).prop_map(Op::Decrement),
            (0u64..5).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// No sequence of operations leaves two lines for one product or a
        /// line with quantity zero.
        #[test]
        fn lines_stay_unique_and_positive(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut cart = Cart::new();
            for op in ops {
                match op {
                    Op::Add(id, qty) => { cart.add_or_increment(item(id, 1.0).with_quantity(qty)); }
                    Op::Decrement(id) => { cart.decrement_or_remove(&ProductId::new(id)); }
                    Op::Remove(id) => { cart.remove_entirely(&ProductId::new(id)); }
                }

                let mut ids: Vec<u64> = cart.items().iter().map(|i| i.id.get()).collect();
                let len = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), len);
                prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
            }
        }

        /// A decrement never takes more than one unit.
        #[test]
        fn decrement_takes_one_unit(qty in 1u32..50) {
            let mut cart = Cart::new();
            let id = ProductId::new(1);
            cart.add_or_increment(item(1, 1.0).with_quantity(qty));
            let before = cart.item_count();
            cart.decrement_or_remove(&id);
            prop_assert_eq!(cart.item_count(), before - 1);
            prop_assert_eq!(cart.is_empty(), qty == 1);
        }

        /// Doubling every quantity doubles subtotal and tax exactly.
        #[test]
        fn totals_are_linear(
            lines in prop::collection::vec((0.0f64..5_000.0, 1u32..100), 0..20),
            rate in 0.0f64..0.5,
        ) {
            let mut single = Cart::new();
            let mut double = Cart::new();
            for (idx, (price, qty)) in lines.iter().enumerate() {
                let line = item(idx as u64, *price).with_quantity(*qty);
                single.add_or_increment(line.clone());
                double.add_or_increment(line.clone());
                double.add_or_increment(line);
            }

            let a = single.totals(rate);
            let b = double.totals(rate);
            prop_assert_eq!(b.subtotal.amount, a.subtotal.amount * 2.0);
            prop_assert_eq!(b.tax.amount, a.tax.amount * 2.0);
        }
    }
}
