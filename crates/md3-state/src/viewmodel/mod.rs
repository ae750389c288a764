//! # View-models
//!
//! One per screen. Each exposes its screen state as [`Observable`]s and
//! forwards user actions to the data layer or the shared cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Screens and View-models                           │
//! │                                                                         │
//! │  Home (catalog grid) ────► CatalogViewModel ──┐                        │
//! │                                                │                        │
//! │  Product detail ─────────► ProductDetailVM ────┼──► Arc<CartStore>     │
//! │                                                │    (the same one)      │
//! │  Cart ───────────────────► CartViewModel ──────┘                        │
//! │                                                                         │
//! │  Catalog and detail also hold Arc<DataSource<S>> for product reads.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Observable`]: crate::Observable

mod cart;
mod catalog;
mod detail;

pub use cart::{CartViewModel, CheckoutReceipt};
pub use catalog::CatalogViewModel;
pub use detail::ProductDetailViewModel;
