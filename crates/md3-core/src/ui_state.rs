//! # Result Modeling
//!
//! Two tagged unions carry the outcome of data loading up to the screens.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Repository                               View-model / Screen          │
//! │   ──────────                               ───────────────────          │
//! │                                                                         │
//! │   FetchResult<T>        ── into() ──►      UiState<T>                   │
//! │   ├── Loading                              ├── Loading                  │
//! │   ├── Success(T)                           ├── Success(T)               │
//! │   └── Error(message)                       ├── Error(message)           │
//! │                                            └── Empty                    │
//! │                                                                         │
//! │   `Empty` only exists on the presentation side: it is what a screen     │
//! │   shows for a successful load with nothing in it.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// FetchResult
// =============================================================================

/// Outcome of a data-layer operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FetchResult<T> {
    /// The operation has started but not completed.
    Loading,
    /// The operation completed with a value.
    Success(T),
    /// The operation failed; the message is meant for display.
    Error(String),
}

impl<T> FetchResult<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchResult::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    /// Consumes the result, returning the value if it succeeded.
    pub fn into_data(self) -> Option<T> {
        match self {
            FetchResult::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchResult::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchResult<U> {
        match self {
            FetchResult::Loading => FetchResult::Loading,
            FetchResult::Success(data) => FetchResult::Success(f(data)),
            FetchResult::Error(message) => FetchResult::Error(message),
        }
    }
}

// =============================================================================
// UiState
// =============================================================================

/// What a screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum UiState<T> {
    Loading,
    Success(T),
    Error(String),
    Empty,
}

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Borrows the value of a successful state.
    pub fn data(&self) -> Option<&T> {
        match self {
            UiState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> UiState<U> {
        match self {
            UiState::Loading => UiState::Loading,
            UiState::Success(data) => UiState::Success(f(data)),
            UiState::Error(message) => UiState::Error(message),
            UiState::Empty => UiState::Empty,
        }
    }
}

/// Screens start out loading.
impl<T> Default for UiState<T> {
    fn default() -> Self {
        UiState::Loading
    }
}

impl<T> UiState<Vec<T>> {
    /// Like `From<FetchResult>`, but a successful empty list becomes `Empty`.
    pub fn from_list(result: FetchResult<Vec<T>>) -> Self {
        match result {
            FetchResult::Success(items) if items.is_empty() => UiState::Empty,
            other => other.into(),
        }
    }
}

/// Variant-for-variant mapping.
impl<T> From<FetchResult<T>> for UiState<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            FetchResult::Loading => UiState::Loading,
            FetchResult::Success(data) => UiState::Success(data),
            FetchResult::Error(message) => UiState::Error(message),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_result_maps_to_ui_state() {
        assert_eq!(UiState::<i32>::from(FetchResult::Loading), UiState::Loading);
        assert_eq!(UiState::from(FetchResult::Success(3)), UiState::Success(3));
        assert_eq!(
            UiState::<i32>::from(FetchResult::Error("boom".to_string())),
            UiState::Error("boom".to_string())
        );
    }

    #[test]
    fn test_from_list_empty_success_is_empty() {
        let state = UiState::from_list(FetchResult::Success(Vec::<i32>::new()));
        assert_eq!(state, UiState::Empty);

        let state = UiState::from_list(FetchResult::Success(vec![1, 2]));
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_accessors() {
        let state: UiState<i32> = UiState::Error("offline".to_string());
        assert_eq!(state.error_message(), Some("offline"));
        assert!(state.data().is_none());
        assert!(UiState::<i32>::default().is_loading());

        let result = FetchResult::Success(2).map(|n| n * 10);
        assert!(result.is_success());
        assert_eq!(result.into_data(), Some(20));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(UiState::Success(vec![1])).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"][0], 1);

        let json = serde_json::to_value(UiState::<i32>::Empty).unwrap();
        assert_eq!(json["status"], "empty");
    }
}
