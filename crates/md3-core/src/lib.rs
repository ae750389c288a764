//! # md3-core: Pure Domain Logic for the MD3 Shop Client
//!
//! This crate holds the parts of the shop client that can be expressed as
//! pure functions: DTO types, integer money, cart snapshot math, and the
//! result types screens render.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MD3 Shop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (external UI)                        │   │
//! │  │      Home ──► Product Detail ──► Cart ──► Checkout              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ observe / forward intent               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    md3-state                                    │   │
//! │  │    CartStore (one, shared), view-models, config                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ md3-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ ui_state  │  │   │
//! │  │   │  Product  │  │   Money   │  │ CartLine  │  │ UiState   │  │   │
//! │  │   │  User ... │  │           │  │ Snapshot  │  │FetchResult│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                    md3-data (repositories)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - DTOs from FakeStore, JSONPlaceholder and GitHub
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Immutable cart snapshots and their transitions
//! - [`ui_state`] - `FetchResult` and `UiState` tagged unions
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary checks for catalog data
//!
//! ## Example Usage
//!
//! ```rust
//! use md3_core::{CartSnapshot, Product};
//!
//! let product = Product {
//!     id: 1,
//!     title: "Test Product".into(),
//!     price: 29.99,
//!     description: String::new(),
//!     category: "test".into(),
//!     image: String::new(),
//!     rating: None,
//! };
//!
//! let cart = CartSnapshot::empty().with_added(&product, 2);
//! assert_eq!(cart.total_price().cents(), 5998);
//! assert_eq!(cart.total_item_count(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod ui_state;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CartSnapshot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use ui_state::{FetchResult, UiState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound of a product rating.
pub const MAX_RATING: f64 = 5.0;

/// Maximum length of a catalog search query, in characters.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
