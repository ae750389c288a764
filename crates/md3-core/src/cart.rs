//! # Cart Math
//!
//! Immutable cart snapshots and the pure transitions between them.
//!
//! `md3-core` never holds a "current" cart. Every operation here takes a
//! snapshot and returns a new one; the state layer decides which snapshot
//! is authoritative and who gets to see it.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Transitions                                 │
//! │                                                                         │
//! │  Operation                 Line exists?        Result                   │
//! │  ─────────                 ────────────        ──────                   │
//! │                                                                         │
//! │  with_added(P, q)          yes                 qty = old + q            │
//! │                            no                  append (P, q)            │
//! │                            (qty <= 0 after)    line removed / not added │
//! │                                                                         │
//! │  with_quantity(id, q)      yes, q > 0          qty = q                  │
//! │                            yes, q <= 0         line removed             │
//! │                            no                  unchanged                │
//! │                                                                         │
//! │  without(id)               yes                 line removed             │
//! │                            no                  unchanged                │
//! │                                                                         │
//! │  Insertion order is preserved: a line never moves once appended.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `product.id`
//! - Every line has `quantity >= 1`

use std::sync::Arc;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart with its quantity.
///
/// The product is a frozen copy taken when it was first added: later catalog
/// refreshes do not change the price of a line already in the cart.
#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    /// Unit price in cents.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// An immutable, point-in-time view of the cart.
///
/// Cloning is cheap (the lines are shared behind an `Arc`), so snapshots can
/// be handed to any number of observers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    lines: Arc<[CartLine]>,
}

impl CartSnapshot {
    /// Creates an empty snapshot.
    pub fn empty() -> Self {
        CartSnapshot {
            lines: Arc::from(Vec::new()),
        }
    }

    fn from_lines(lines: Vec<CartLine>) -> Self {
        CartSnapshot {
            lines: Arc::from(lines),
        }
    }

    /// Returns a snapshot with `quantity` more of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity is increased by `quantity`
    /// - Product not in cart: appended at the end
    /// - Resulting quantity `<= 0`: the line is dropped (or never created),
    ///   the same rule `with_quantity` applies
    pub fn with_added(&self, product: &Product, quantity: i64) -> CartSnapshot {
        match self.position(product.id) {
            Some(index) => {
                let new_qty = self.lines[index].quantity.saturating_add(quantity);
                self.with_quantity(product.id, new_qty)
            }
            None if quantity > 0 => {
                let mut lines = self.lines.to_vec();
                lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
                CartSnapshot::from_lines(lines)
            }
            None => self.clone(),
        }
    }

    /// Returns a snapshot without the line for `product_id`.
    pub fn without(&self, product_id: ProductId) -> CartSnapshot {
        if self.position(product_id).is_none() {
            return self.clone();
        }
        CartSnapshot::from_lines(
            self.lines
                .iter()
                .filter(|line| line.product.id != product_id)
                .cloned()
                .collect(),
        )
    }

    /// Returns a snapshot with the line for `product_id` set to `quantity`.
    ///
    /// `quantity <= 0` is the same as [`CartSnapshot::without`].
    pub fn with_quantity(&self, product_id: ProductId, quantity: i64) -> CartSnapshot {
        if quantity <= 0 {
            return self.without(product_id);
        }

        let Some(index) = self.position(product_id) else {
            return self.clone();
        };

        let mut lines = self.lines.to_vec();
        lines[index].quantity = quantity;
        CartSnapshot::from_lines(lines)
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines, saturating at `i64::MAX`.
    pub fn total_item_count(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, i64::saturating_add)
    }

    /// Number of distinct products.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product.id == product_id)
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        CartSnapshot::empty()
    }
}

/// Serializes as a plain JSON array of lines.
impl Serialize for CartSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lines.iter())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            description: "A test product".to_string(),
            category: "test".to_string(),
            image: "test.jpg".to_string(),
            rating: None,
        }
    }

    #[test]
    fn test_add_new_product() {
        let cart = CartSnapshot::empty().with_added(&product(1, 29.99), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(1), 2);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let p = product(1, 9.99);
        let cart = CartSnapshot::empty().with_added(&p, 2).with_added(&p, 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(1), 5);
    }

    #[test]
    fn test_add_sums_every_quantity() {
        let p = product(7, 1.0);
        let quantities = [1, 4, 2, 8, 3];

        let cart = quantities
            .iter()
            .fold(CartSnapshot::empty(), |cart, &q| cart.with_added(&p, q));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(7), quantities.iter().sum::<i64>());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let a = product(3, 1.0);
        let b = product(1, 1.0);
        let c = product(2, 1.0);

        let cart = CartSnapshot::empty()
            .with_added(&a, 1)
            .with_added(&b, 1)
            .with_added(&c, 1)
            .with_added(&a, 1)
            .with_quantity(1, 9);

        let ids: Vec<_> = cart.iter().map(CartLine::product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_non_positive_result_drops_line() {
        let p = product(1, 5.0);
        let cart = CartSnapshot::empty().with_added(&p, 2).with_added(&p, -2);
        assert!(cart.is_empty());

        let cart = CartSnapshot::empty().with_added(&p, 0);
        assert!(cart.is_empty());

        let cart = CartSnapshot::empty().with_added(&p, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_negative_delta_keeps_positive_line() {
        let p = product(1, 5.0);
        let cart = CartSnapshot::empty().with_added(&p, 5).with_added(&p, -2);
        assert_eq!(cart.quantity_of(1), 3);
    }

    #[test]
    fn test_without_absent_is_value_equal() {
        let cart = CartSnapshot::empty().with_added(&product(1, 1.0), 1);
        assert_eq!(cart.without(42), cart);
    }

    #[test]
    fn test_with_quantity_non_positive_removes() {
        let cart = CartSnapshot::empty()
            .with_added(&product(1, 1.0), 3)
            .with_added(&product(2, 1.0), 1);

        assert_eq!(cart.with_quantity(1, 0).quantity_of(1), 0);
        assert_eq!(cart.with_quantity(1, 0).line_count(), 1);
        assert_eq!(cart.with_quantity(1, -5).line_count(), 1);
        assert!(cart.with_quantity(1, -5).line(1).is_none());
    }

    #[test]
    fn test_with_quantity_absent_is_noop() {
        let cart = CartSnapshot::empty().with_added(&product(1, 1.0), 3);
        assert_eq!(cart.with_quantity(99, 4), cart);
    }

    #[test]
    fn test_totals() {
        let cart = CartSnapshot::empty().with_added(&product(1, 29.99), 2);
        assert_eq!(cart.total_price().cents(), 5998);
        assert!((cart.total_price().to_decimal() - 59.98).abs() < 0.01);

        let cart = CartSnapshot::empty()
            .with_added(&product(1, 29.99), 3)
            .with_added(&product(2, 29.99), 2);
        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn test_huge_quantity_total_saturates() {
        let cart = CartSnapshot::empty().with_added(&product(1, 29.99), 10_000_000_000_000_000);

        assert_eq!(cart.total_price(), Money::from_cents(i64::MAX));
        assert_eq!(cart.total_item_count(), 10_000_000_000_000_000);
    }

    #[test]
    fn test_max_sized_lines_saturate() {
        let cart = CartSnapshot::empty()
            .with_added(&product(1, 1.0), i64::MAX)
            .with_added(&product(2, 1.0), i64::MAX)
            .with_added(&product(3, 0.0), 1);

        assert_eq!(cart.total_item_count(), i64::MAX);
        assert_eq!(cart.total_price(), Money::from_cents(i64::MAX));

        let grown = cart.with_added(&product(1, 1.0), 5);
        assert_eq!(grown.quantity_of(1), i64::MAX);
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let cart = CartSnapshot::empty();
        assert!(cart.total_price().is_zero());
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let before = CartSnapshot::empty().with_added(&product(1, 1.0), 1);
        let after = before.with_quantity(1, 10);

        assert_eq!(before.quantity_of(1), 1);
        assert_eq!(after.quantity_of(1), 10);
    }

    #[test]
    fn test_snapshot_serializes_as_array() {
        let cart = CartSnapshot::empty().with_added(&product(1, 2.5), 2);
        let json = serde_json::to_value(&cart).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["product"]["id"], 1);
    }
}
