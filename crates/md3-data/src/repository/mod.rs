//! # Repository Module
//!
//! Repository implementations over an [`ApiService`](crate::ApiService).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  View-model                                                            │
//! │       │                                                                 │
//! │       │  data.products().products().await                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── cache lookup                                                      │
//! │  ├── ApiService call on miss                                           │
//! │  └── DataError ──► FetchResult::Error(message)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiService (HTTP client or FixtureApi)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - FakeStore catalog, cached
//! - [`UserRepository`](user::UserRepository) - JSONPlaceholder users and posts
//! - [`SearchRepository`](search::SearchRepository) - GitHub user search

pub mod product;
pub mod search;
pub mod user;
