//! # State Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       State Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────────┐    │
//! │  │  Configuration          │        │  Data                       │    │
//! │  │                         │        │                             │    │
//! │  │  ConfigLoadFailed       │        │  Data(DataError)            │    │
//! │  │  InvalidConfig          │        │  (fixture loading at        │    │
//! │  │                         │        │   startup)                  │    │
//! │  └─────────────────────────┘        └─────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself never fails; only startup can.

use thiserror::Error;

use md3_data::DataError;

/// Result type alias for state-layer operations.
pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

impl From<std::io::Error> for StateError {
    fn from(err: std::io::Error) -> Self {
        StateError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StateError {
    fn from(err: toml::de::Error) -> Self {
        StateError::ConfigLoadFailed(err.to_string())
    }
}

impl StateError {
    /// Returns true if this error came from configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StateError::ConfigLoadFailed(_) | StateError::InvalidConfig(_)
        )
    }
}
