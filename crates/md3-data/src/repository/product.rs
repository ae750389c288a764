//! # Product Repository
//!
//! Catalog reads with an in-memory cache.
//!
//! ## Caching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How the Product Cache Works                          │
//! │                                                                         │
//! │  products()                                                             │
//! │     │                                                                   │
//! │     ├── list cache hit? ──► Success(cached list)                        │
//! │     │                                                                   │
//! │     └── miss ──► api.products() ──► fill list cache                     │
//! │                                  └─► fill per-id cache for every item   │
//! │                                                                         │
//! │  product(id)                                                            │
//! │     │                                                                   │
//! │     ├── per-id cache hit? ──► Success(cached product)                   │
//! │     │                                                                   │
//! │     └── miss ──► api.product(id) ──► fill per-id cache                  │
//! │                                                                         │
//! │  invalidate() drops both caches (pull-to-refresh).                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use md3_core::{FetchResult, Product, ProductId};

use crate::api::ApiService;

/// Fallback message when the collaborator's error carries no text.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Repository for catalog reads.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(api);
///
/// let all = repo.products().await;   // FetchResult<Vec<Product>>
/// let one = repo.product(1).await;   // served from cache after the list load
/// ```
pub struct ProductRepository<S> {
    api: Arc<S>,
    list_cache: RwLock<Option<Vec<Product>>>,
    item_cache: RwLock<HashMap<ProductId, Product>>,
}

impl<S: ApiService> ProductRepository<S> {
    /// Creates a new ProductRepository.
    pub fn new(api: Arc<S>) -> Self {
        ProductRepository {
            api,
            list_cache: RwLock::new(None),
            item_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the full catalog.
    pub async fn products(&self) -> FetchResult<Vec<Product>> {
        if let Some(cached) = self.list_cache.read().await.as_ref() {
            debug!(count = cached.len(), "Serving products from cache");
            return FetchResult::Success(cached.clone());
        }

        match self.api.products().await {
            Ok(products) => {
                debug!(count = products.len(), "Fetched products");
                {
                    let mut items = self.item_cache.write().await;
                    for product in &products {
                        items.insert(product.id, product.clone());
                    }
                }
                *self.list_cache.write().await = Some(products.clone());
                FetchResult::Success(products)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch products");
                FetchResult::Error(e.user_message(UNKNOWN_ERROR))
            }
        }
    }

    /// Returns a single product.
    pub async fn product(&self, id: ProductId) -> FetchResult<Product> {
        if let Some(cached) = self.item_cache.read().await.get(&id) {
            debug!(product_id = id, "Serving product from cache");
            return FetchResult::Success(cached.clone());
        }

        match self.api.product(id).await {
            Ok(product) => {
                self.item_cache.write().await.insert(id, product.clone());
                FetchResult::Success(product)
            }
            Err(e) => {
                warn!(product_id = id, error = %e, "Failed to fetch product");
                FetchResult::Error(e.user_message(UNKNOWN_ERROR))
            }
        }
    }

    /// Drops every cached product; the next read goes upstream.
    pub async fn invalidate(&self) {
        debug!("Invalidating product cache");
        *self.list_cache.write().await = None;
        self.item_cache.write().await.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingApi;

    #[tokio::test]
    async fn test_list_is_cached() {
        let api = Arc::new(CountingApi::with_products(3));
        let repo = ProductRepository::new(api.clone());

        let first = repo.products().await;
        let second = repo.products().await;

        assert_eq!(first, second);
        assert_eq!(first.into_data().unwrap().len(), 3);
        assert_eq!(api.product_list_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_load_populates_item_cache() {
        let api = Arc::new(CountingApi::with_products(3));
        let repo = ProductRepository::new(api.clone());

        repo.products().await;
        let product = repo.product(2).await.into_data().unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(api.product_item_calls(), 0);
    }

    #[tokio::test]
    async fn test_single_product_is_cached() {
        let api = Arc::new(CountingApi::with_products(3));
        let repo = ProductRepository::new(api.clone());

        repo.product(1).await;
        repo.product(1).await;

        assert_eq!(api.product_item_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let api = Arc::new(CountingApi::with_products(1));
        let repo = ProductRepository::new(api.clone());

        repo.products().await;
        repo.invalidate().await;
        repo.products().await;

        assert_eq!(api.product_list_calls(), 2);
    }

    #[tokio::test]
    async fn test_errors_become_messages() {
        let api = Arc::new(CountingApi::failing(""));
        let repo = ProductRepository::new(api);

        assert_eq!(
            repo.products().await,
            FetchResult::Error("Unknown error".to_string())
        );
        assert_eq!(
            repo.product(1).await,
            FetchResult::Error("Unknown error".to_string())
        );
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let api = Arc::new(CountingApi::failing("offline"));
        let repo = ProductRepository::new(api.clone());

        assert_eq!(
            repo.products().await.error_message(),
            Some("offline")
        );
        repo.products().await;
        assert_eq!(api.product_list_calls(), 2);
    }
}
