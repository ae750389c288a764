//! # Fixture API
//!
//! An [`ApiService`] that answers from JSON files instead of the network.
//!
//! ## Directory Layout
//! ```text
//! fixtures/
//! ├── products.json       ◄─── FakeStore  /products       (array)
//! ├── users.json          ◄─── JSONPlaceholder /users     (array)
//! ├── posts.json          ◄─── JSONPlaceholder /posts     (array)
//! └── github_users.json   ◄─── GitHub search items        (array)
//! ```
//!
//! Missing files are treated as empty collections. Files are read once, at
//! construction; the catalog is validated before it is accepted.
//!
//! ## Usage
//! ```rust,no_run
//! use md3_data::FixtureApi;
//!
//! let api = FixtureApi::from_dir("./fixtures")?;
//! # Ok::<(), md3_data::DataError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use md3_core::validation::validate_catalog;
use md3_core::{GitHubSearchResponse, GitHubUser, Post, Product, ProductId, User};

use crate::api::ApiService;
use crate::error::{DataError, DataResult};

/// Bundled sample catalog used when no fixture directory is configured.
const SAMPLE_PRODUCTS: &str = include_str!("../fixtures/products.json");

/// File-backed stand-in for the REST collaborators.
#[derive(Debug, Clone, Default)]
pub struct FixtureApi {
    products: Vec<Product>,
    users: Vec<User>,
    posts: Vec<Post>,
    github_users: Vec<GitHubUser>,
}

impl FixtureApi {
    /// An API with no data at all.
    pub fn empty() -> Self {
        FixtureApi::default()
    }

    /// An API serving only the bundled sample catalog.
    pub fn sample() -> DataResult<Self> {
        let products: Vec<Product> = serde_json::from_str(SAMPLE_PRODUCTS)?;
        FixtureApi::empty().with_products(products)
    }

    /// Loads every fixture file found in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> DataResult<Self> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "Loading fixtures");

        let api = FixtureApi {
            products: Vec::new(),
            users: read_array(&dir.join("users.json"))?,
            posts: read_array(&dir.join("posts.json"))?,
            github_users: read_array(&dir.join("github_users.json"))?,
        }
        .with_products(read_array(&dir.join("products.json"))?)?;

        info!(
            products = api.products.len(),
            users = api.users.len(),
            posts = api.posts.len(),
            github_users = api.github_users.len(),
            "Fixtures loaded"
        );
        Ok(api)
    }

    /// Replaces the catalog after validating it.
    pub fn with_products(mut self, products: Vec<Product>) -> DataResult<Self> {
        validate_catalog(&products)?;
        self.products = products;
        Ok(self)
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_github_users(mut self, github_users: Vec<GitHubUser>) -> Self {
        self.github_users = github_users;
        self
    }
}

/// Reads a JSON array, or an empty Vec if the file does not exist.
fn read_array<T: DeserializeOwned>(path: &Path) -> DataResult<Vec<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "Fixture file not found, using empty list");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

impl ApiService for FixtureApi {
    async fn products(&self) -> DataResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn product(&self, id: ProductId) -> DataResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("Product", id))
    }

    async fn users(&self) -> DataResult<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn user(&self, id: i64) -> DataResult<User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("User", id))
    }

    async fn posts(&self) -> DataResult<Vec<Post>> {
        Ok(self.posts.clone())
    }

    async fn search_github_users(&self, query: &str) -> DataResult<GitHubSearchResponse> {
        let needle = query.to_lowercase();
        let items = self
            .github_users
            .iter()
            .filter(|u| u.login.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(GitHubSearchResponse::from_items(items))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
