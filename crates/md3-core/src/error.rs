//! # Error Types
//!
//! Domain-specific error types for md3-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  md3-core errors (this file)                                           │
//! │  ├── CoreError        - Catalog-level domain errors                    │
//! │  └── ValidationError  - Single-field validation failures               │
//! │                                                                         │
//! │  md3-data errors (separate crate)                                      │
//! │  └── DataError        - Upstream / fixture failures                    │
//! │                                                                         │
//! │  md3-state errors                                                      │
//! │  └── StateError       - Config loading, wraps DataError                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DataError → UiState::Error(msg)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself has no error path: every cart operation is total.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised when checking data that enters the client.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an identifier.
    ///
    /// The cart keys lines by product id, so a catalog with duplicates
    /// would make two different products collapse into one line.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// A catalog entry failed field validation.
    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        id: ProductId,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
