//! # Data Error Types
//!
//! Error types for data-layer operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ApiService impl ──► DataError ──► Repository ──► FetchResult::Error   │
//! │  (HTTP / fixture)                  (catches)        (display message)  │
//! │                                                                         │
//! │  DataError::Upstream("")    ──► fallback message ("Unknown error")     │
//! │  DataError::NotFound{..}    ──► "Product not found: 42"                │
//! │                                                                         │
//! │  Repositories never propagate DataError to callers: screens only ever  │
//! │  see a message string.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use md3_core::CoreError;
use thiserror::Error;

/// Data-layer errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// Requested entity does not exist upstream.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The upstream collaborator failed (network, HTTP status, timeout...).
    ///
    /// The message comes from the collaborator and may be empty.
    #[error("{0}")]
    Upstream(String),

    /// Reading a fixture file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A payload did not match the expected DTO shape.
    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Catalog data failed domain validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CoreError),
}

impl DataError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DataError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates an upstream failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        DataError::Upstream(message.into())
    }

    /// Message shown to the user, or `fallback` when the error carries none.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Convenience type alias for Results with DataError.
pub type DataResult<T> = Result<T, DataError>;
