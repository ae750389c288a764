//! # Domain Types
//!
//! Data transfer objects returned by the three upstream REST collaborators.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Upstream DTOs                                   │
//! │                                                                         │
//! │  FakeStore                JSONPlaceholder           GitHub              │
//! │  ─────────                ───────────────           ──────              │
//! │  ┌──────────────┐        ┌──────────────┐         ┌──────────────────┐ │
//! │  │   Product    │        │    User      │         │ GitHubSearch     │ │
//! │  │  id (i64)    │        │  Address     │         │   Response       │ │
//! │  │  title       │        │   └─ Geo     │         │  items: [        │ │
//! │  │  price (f64) │        │  Company     │         │   GitHubUser ]   │ │
//! │  │  Rating?     │        ├──────────────┤         └──────────────────┘ │
//! │  └──────────────┘        │    Post      │                              │
//! │                          └──────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names match the upstream JSON so responses deserialize directly.
//! Unknown fields are ignored (serde's default).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Product identifier as assigned by the catalog.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Price in major units, exactly as the catalog publishes it.
    pub price: f64,

    pub description: String,

    pub category: String,

    /// Image URL.
    pub image: String,

    /// Customer rating, absent for some catalog entries.
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Returns the price as a Money type (rounded to the cent).
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_decimal(self.price)
    }

    /// Case-insensitive substring match over title, category and description.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average rate, 0 to 5.
    pub rate: f64,
    /// Number of ratings.
    pub count: i64,
}

// =============================================================================
// JSONPlaceholder
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Option<Geo>,
}

/// Coordinates, kept as strings the way JSONPlaceholder serves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub catch_phrase: Option<String>,
    #[serde(default)]
    pub bs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

// =============================================================================
// GitHub
// =============================================================================

/// Response of `GET /search/users`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GitHubSearchResponse {
    pub total_count: i64,
    pub incomplete_results: bool,
    pub items: Vec<GitHubUser>,
}

impl GitHubSearchResponse {
    /// Builds a complete (non-truncated) response from a list of users.
    pub fn from_items(items: Vec<GitHubUser>) -> Self {
        GitHubSearchResponse {
            total_count: items.len() as i64,
            incomplete_results: false,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
}

fn default_account_type() -> String {
    "User".to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
