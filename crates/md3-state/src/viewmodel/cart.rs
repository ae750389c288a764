//! # Cart Screen
//!
//! Quantity steppers, remove buttons, the order summary and a stub checkout.
//!
//! ## Checkout Flow
//! ```text
//! checkout()
//!    │
//!    ├── totals from the current snapshot
//!    ├── CheckoutReceipt { order_id: UUID v4, item_count, total, completed_at }
//!    ├── show_checkout_success = true
//!    └── cart.clear()
//!
//! dismiss_checkout_success() ──► show_checkout_success = false
//! ```
//!
//! No payment is taken; an empty cart checks out with zero totals.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use md3_core::{CartSnapshot, Money, ProductId};

use crate::cart::{CartStore, CartTotals};
use crate::observable::{Observable, Subscription};

/// Record of a completed (mock) checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: Uuid,
    /// Sum of quantities at checkout
    pub item_count: i64,
    pub total: Money,
    pub completed_at: DateTime<Utc>,
}

pub struct CartViewModel {
    cart: Arc<CartStore>,
    show_checkout_success: Observable<bool>,
    last_receipt: Observable<Option<CheckoutReceipt>>,
}

impl CartViewModel {
    pub fn new(cart: Arc<CartStore>) -> Self {
        CartViewModel {
            cart,
            show_checkout_success: Observable::new(false),
            last_receipt: Observable::new(None),
        }
    }

    /// Observes the cart lines.
    pub fn subscribe_items<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CartSnapshot) + Send + Sync + 'static,
    {
        self.cart.subscribe(callback)
    }

    pub fn items(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    pub fn show_checkout_success(&self) -> &Observable<bool> {
        &self.show_checkout_success
    }

    /// Receipt of the most recent checkout, if any.
    pub fn last_receipt(&self) -> &Observable<Option<CheckoutReceipt>> {
        &self.last_receipt
    }

    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    pub fn remove_item(&self, product_id: ProductId) {
        self.cart.remove_item(product_id);
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn total_item_count(&self) -> i64 {
        self.cart.total_item_count()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Completes a mock checkout and empties the cart.
    pub fn checkout(&self) -> CheckoutReceipt {
        let totals = self.cart.totals();
        let receipt = CheckoutReceipt {
            order_id: Uuid::new_v4(),
            item_count: totals.item_count,
            total: totals.total_price,
            completed_at: Utc::now(),
        };

        info!(
            order_id = %receipt.order_id,
            items = receipt.item_count,
            total = %receipt.total,
            "Checkout completed"
        );

        self.last_receipt.set(Some(receipt.clone()));
        self.show_checkout_success.set(true);
        self.cart.clear();
        receipt
    }

    pub fn dismiss_checkout_success(&self) {
        debug!("Checkout success dismissed");
        self.show_checkout_success.set(false);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use md3_core::{Product, Rating};

    fn sample_product() -> Product {
        Product {
            id: 1,
            title: "Test Product".to_string(),
            price: 19.99,
            description: "A test product".to_string(),
            category: "test".to_string(),
            image: "test.jpg".to_string(),
            rating: Some(Rating {
                rate: 4.0,
                count: 50,
            }),
        }
    }

    fn view_model() -> (CartViewModel, Arc<CartStore>) {
        let cart = Arc::new(CartStore::new());
        (CartViewModel::new(cart.clone()), cart)
    }

    #[test]
    fn test_update_quantity() {
        let (vm, cart) = view_model();
        cart.add_item(&sample_product(), 1);

        vm.update_quantity(1, 3);

        assert_eq!(vm.items().quantity_of(1), 3);
    }

    #[test]
    fn test_remove_item() {
        let (vm, cart) = view_model();
        cart.add_item(&sample_product(), 2);

        vm.remove_item(1);

        assert!(vm.items().line(1).is_none());
    }

    #[test]
    fn test_total_price() {
        let (vm, cart) = view_model();
        cart.add_item(&sample_product(), 2);

        assert_eq!(vm.total_price(), Money::from_cents(3998));
        assert!((vm.total_price().to_decimal() - 39.98).abs() < 0.01);
        assert_eq!(vm.total_item_count(), 2);
    }

    #[test]
    fn test_checkout_shows_success_and_clears_cart() {
        let (vm, cart) = view_model();
        cart.add_item(&sample_product(), 1);

        let receipt = vm.checkout();

        assert!(vm.show_checkout_success().get());
        assert!(cart.snapshot().is_empty());
        assert_eq!(receipt.item_count, 1);
        assert_eq!(receipt.total, Money::from_cents(1999));
        assert_eq!(vm.last_receipt().get(), Some(receipt));
    }

    #[test]
    fn test_empty_checkout_succeeds_with_zero_totals() {
        let (vm, _) = view_model();

        let receipt = vm.checkout();

        assert!(vm.show_checkout_success().get());
        assert_eq!(receipt.item_count, 0);
        assert!(receipt.total.is_zero());
    }

    #[test]
    fn test_each_checkout_gets_a_new_order_id() {
        let (vm, _) = view_model();
        assert_ne!(vm.checkout().order_id, vm.checkout().order_id);
    }

    #[test]
    fn test_dismiss_checkout_success() {
        let (vm, _) = view_model();
        vm.checkout();

        vm.dismiss_checkout_success();

        assert!(!vm.show_checkout_success().get());
    }

    #[test]
    fn test_subscribe_items_sees_checkout_clear() {
        let (vm, cart) = view_model();
        cart.add_item(&sample_product(), 2);

        let counts = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = counts.clone();
        let _sub = vm.subscribe_items(move |s| sink.lock().unwrap().push(s.total_item_count()));

        vm.checkout();
        assert_eq!(*counts.lock().unwrap(), vec![2, 0]);
    }
}
