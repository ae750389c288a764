//! # API Service Boundary
//!
//! The trait the REST client implements. Building that client (base URLs,
//! JSON negotiation, timeouts) is outside this workspace; repositories only
//! ever see this trait.
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────────┐
//! │  Method                  │  Upstream endpoint                           │
//! ├──────────────────────────┼──────────────────────────────────────────────┤
//! │  products()              │  GET fakestoreapi.com/products               │
//! │  product(id)             │  GET fakestoreapi.com/products/{id}          │
//! │  users()                 │  GET jsonplaceholder.typicode.com/users      │
//! │  user(id)                │  GET jsonplaceholder.typicode.com/users/{id} │
//! │  posts()                 │  GET jsonplaceholder.typicode.com/posts      │
//! │  search_github_users(q)  │  GET api.github.com/search/users?q={q}       │
//! └──────────────────────────┴──────────────────────────────────────────────┘
//! ```

use std::future::Future;

use md3_core::{GitHubSearchResponse, Post, Product, ProductId, User};

use crate::error::DataResult;

/// Upstream REST collaborator.
///
/// Implementations must be shareable across tasks; repositories hold them
/// behind an `Arc`.
pub trait ApiService: Send + Sync + 'static {
    fn products(&self) -> impl Future<Output = DataResult<Vec<Product>>> + Send;

    fn product(&self, id: ProductId) -> impl Future<Output = DataResult<Product>> + Send;

    fn users(&self) -> impl Future<Output = DataResult<Vec<User>>> + Send;

    fn user(&self, id: i64) -> impl Future<Output = DataResult<User>> + Send;

    fn posts(&self) -> impl Future<Output = DataResult<Vec<Post>>> + Send;

    fn search_github_users(
        &self,
        query: &str,
    ) -> impl Future<Output = DataResult<GitHubSearchResponse>> + Send;
}
