//! # Validation Module
//!
//! Checks applied to data at the client boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Upstream API                                                 │
//! │  └── FakeStore owns ids, prices and ratings                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Deserialization (serde)                                      │
//! │  └── Shape and types                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── validate_product: title, price >= 0, rating in range              │
//! │  ├── validate_catalog: unique ids                                      │
//! │  └── validate_search_query: trimmed, bounded                           │
//! │                                                                         │
//! │  The cart trusts whatever passed these checks.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use md3_core::validation::validate_search_query;
//!
//! assert_eq!(validate_search_query("  backpack ").unwrap(), "backpack");
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::{MAX_RATING, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a single catalog product.
///
/// ## Rules
/// - Title must not be blank
/// - Price must be finite and non-negative (zero is a free item)
/// - Rating, if present: `rate` in 0..=5, `count` non-negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if let Some(rating) = &product.rating {
        if !(0.0..=MAX_RATING).contains(&rating.rate) {
            return Err(ValidationError::OutOfRange {
                field: "rating.rate".to_string(),
                min: 0.0,
                max: MAX_RATING,
            });
        }
        if rating.count < 0 {
            return Err(ValidationError::Negative {
                field: "rating.count".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a whole catalog: every product individually, and ids unique.
pub fn validate_catalog(products: &[Product]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product).map_err(|source| CoreError::InvalidProduct {
            id: product.id,
            source,
        })?;

        if !seen.insert(product.id) {
            return Err(CoreError::DuplicateProductId(product.id));
        }
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters after trimming
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
