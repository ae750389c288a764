//! # Cart Store
//!
//! The one shopping cart every screen shares.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Screen Action            CartStore call          Snapshot Change       │
//! │  ─────────────            ──────────────          ───────────────       │
//! │                                                                         │
//! │  Add to cart ────────────► add_item() ──────────► line appended or     │
//! │                                                   quantity increased    │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ──────► lines[i].qty = n     │
//! │                                                   (n <= 0 removes)      │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► line dropped         │
//! │                                                                         │
//! │  Checkout ───────────────► clear() ─────────────► empty snapshot       │
//! │                                                                         │
//! │  Badge / summary ────────► totals() ────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: every write replaces the whole snapshot under the observable's  │
//! │        writer lock, then notifies subscribers synchronously.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing
//! `AppState` creates exactly one `Arc<CartStore>` and hands clones of it to
//! every view-model. Nothing else constructs a store for the app.

use serde::{Deserialize, Serialize};
use tracing::debug;

use md3_core::{CartSnapshot, Money, Product, ProductId};

use crate::observable::{Observable, Subscription};

/// Cart totals for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products in the cart
    pub line_count: usize,
    /// Sum of quantities
    pub item_count: i64,
    pub total_price: Money,
}

impl From<&CartSnapshot> for CartTotals {
    fn from(snapshot: &CartSnapshot) -> Self {
        CartTotals {
            line_count: snapshot.line_count(),
            item_count: snapshot.total_item_count(),
            total_price: snapshot.total_price(),
        }
    }
}

/// Observable, thread-safe shopping cart.
///
/// ## Usage
/// ```rust
/// use md3_core::Product;
/// use md3_state::CartStore;
///
/// let cart = CartStore::new();
/// let mug = Product {
///     id: 1,
///     title: "Mug".to_string(),
///     price: 29.99,
///     description: String::new(),
///     category: "kitchen".to_string(),
///     image: String::new(),
///     rating: None,
/// };
///
/// cart.add_item(&mug, 2);
/// assert_eq!(cart.total_item_count(), 2);
/// assert_eq!(cart.total_price().cents(), 5998);
/// ```
#[derive(Debug, Default)]
pub struct CartStore {
    state: Observable<CartSnapshot>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartStore {
            state: Observable::new(CartSnapshot::empty()),
        }
    }

    /// Adds `quantity` of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity is increased
    /// - Product not in cart: appended after existing lines
    /// - Resulting quantity `<= 0`: the line is removed (or never created)
    pub fn add_item(&self, product: &Product, quantity: i64) {
        let next = self.state.update(|cart| cart.with_added(product, quantity));
        debug!(
            product_id = product.id,
            quantity,
            line_quantity = next.quantity_of(product.id),
            lines = next.line_count(),
            "Cart add_item"
        );
    }

    /// Adds a single unit of `product`.
    pub fn add_one(&self, product: &Product) {
        self.add_item(product, 1);
    }

    /// Removes the line for `product_id`. Absent ids still publish.
    pub fn remove_item(&self, product_id: ProductId) {
        let next = self.state.update(|cart| cart.without(product_id));
        debug!(product_id, lines = next.line_count(), "Cart remove_item");
    }

    /// Sets the quantity of an existing line; `quantity <= 0` removes it.
    pub fn set_quantity(&self, product_id: ProductId, quantity: i64) {
        let next = self
            .state
            .update(|cart| cart.with_quantity(product_id, quantity));
        debug!(
            product_id,
            quantity,
            lines = next.line_count(),
            "Cart set_quantity"
        );
    }

    pub fn clear(&self) {
        self.state.set(CartSnapshot::empty());
        debug!("Cart cleared");
    }

    /// Σ price × quantity of the current snapshot.
    pub fn total_price(&self) -> Money {
        self.snapshot().total_price()
    }

    /// Σ quantity of the current snapshot.
    pub fn total_item_count(&self) -> i64 {
        self.snapshot().total_item_count()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.snapshot().quantity_of(product_id)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.state.get()
    }

    /// All totals computed from one snapshot.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.snapshot())
    }

    /// Observes the cart. The current snapshot is delivered immediately.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CartSnapshot) + Send + Sync + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
