//! # md3-data: Data Layer for the MD3 Shop Client
//!
//! Reads from the three upstream REST collaborators, behind a trait, with
//! caching and error-to-message mapping.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MD3 Shop Data Flow                               │
//! │                                                                         │
//! │  View-model (CatalogViewModel::load)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     md3-data (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  DataSource   │    │  Repositories │    │  FixtureApi  │  │   │
//! │  │   │  (lib.rs)     │───►│ ProductRepo   │───►│  (or real    │  │   │
//! │  │   │               │    │ UserRepo      │    │  HTTP impl)  │  │   │
//! │  │   │               │    │ SearchRepo    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`api`] - The `ApiService` collaborator trait
//! - [`fixture`] - JSON-file backed `ApiService`
//! - [`error`] - Data error types
//! - [`repository`] - Caching repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! use md3_data::{DataSource, FixtureApi};
//!
//! # async fn demo() -> Result<(), md3_data::DataError> {
//! let data = DataSource::new(FixtureApi::sample()?);
//! let products = data.products().products().await;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod error;
pub mod fixture;
pub mod repository;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::ApiService;
pub use error::{DataError, DataResult};
pub use fixture::FixtureApi;

pub use repository::product::ProductRepository;
pub use repository::search::SearchRepository;
pub use repository::user::UserRepository;

use std::sync::Arc;

/// Owns one instance of each repository over a shared `ApiService`.
///
/// Repositories keep caches, so a `DataSource` is created once and shared
/// (behind an `Arc`) rather than rebuilt per screen.
pub struct DataSource<S> {
    products: ProductRepository<S>,
    users: UserRepository<S>,
    search: SearchRepository<S>,
}

impl<S: ApiService> DataSource<S> {
    pub fn new(api: S) -> Self {
        let api = Arc::new(api);
        DataSource {
            products: ProductRepository::new(api.clone()),
            users: UserRepository::new(api.clone()),
            search: SearchRepository::new(api),
        }
    }

    /// Returns the product repository.
    pub fn products(&self) -> &ProductRepository<S> {
        &self.products
    }

    /// Returns the user/post repository.
    pub fn users(&self) -> &UserRepository<S> {
        &self.users
    }

    /// Returns the GitHub search repository.
    pub fn search(&self) -> &SearchRepository<S> {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_data_source_over_sample_fixtures() {
        let data = DataSource::new(FixtureApi::sample().unwrap());

        let products = data.products().products().await.into_data().unwrap();
        assert!(!products.is_empty());

        let first = data.products().product(products[0].id).await;
        assert!(first.is_success());

        assert!(data.users().users().await.into_data().unwrap().is_empty());
        assert!(data.search().search_users("").await.is_success());
    }

    #[tokio::test]
    async fn test_data_source_over_builder_fixtures() {
        use md3_core::{GitHubUser, Post, User};

        let api = FixtureApi::empty()
            .with_users(vec![User {
                id: 3,
                name: "Clementine Bauch".to_string(),
                username: "Samantha".to_string(),
                email: "nathan@yesenia.net".to_string(),
                address: None,
                phone: None,
                website: None,
                company: None,
            }])
            .with_posts(vec![Post {
                id: 21,
                user_id: 3,
                title: "asperiores ea ipsam".to_string(),
                body: String::new(),
            }])
            .with_github_users(vec![GitHubUser {
                id: 583231,
                login: "octocat".to_string(),
                avatar_url: String::new(),
                html_url: "https://github.com/octocat".to_string(),
                account_type: "User".to_string(),
            }]);
        let data = DataSource::new(api);

        let user = data.users().user(3).await.into_data().unwrap();
        assert_eq!(user.username, "Samantha");

        let posts = data.users().posts().await.into_data().unwrap();
        assert_eq!(posts[0].user_id, user.id);

        let found = data.search().search_users("Octo").await.into_data().unwrap();
        assert_eq!(found.total_count, 1);
        assert!(data
            .search()
            .search_users("hubot")
            .await
            .into_data()
            .unwrap()
            .items
            .is_empty());
    }
}
