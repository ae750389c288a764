//! Home screen: the product grid with search and category chips.

use std::sync::Arc;

use tracing::debug;

use md3_core::{Product, UiState};
use md3_data::{ApiService, DataSource};

use crate::cart::CartStore;
use crate::observable::Observable;

pub struct CatalogViewModel<S> {
    data: Arc<DataSource<S>>,
    cart: Arc<CartStore>,
    products: Observable<UiState<Vec<Product>>>,
    search_query: Observable<String>,
}

impl<S: ApiService> CatalogViewModel<S> {
    pub fn new(data: Arc<DataSource<S>>, cart: Arc<CartStore>) -> Self {
        CatalogViewModel {
            data,
            cart,
            products: Observable::new(UiState::Loading),
            search_query: Observable::new(String::new()),
        }
    }

    /// Product list state. Starts as `Loading`.
    pub fn products(&self) -> &Observable<UiState<Vec<Product>>> {
        &self.products
    }

    pub fn search_query(&self) -> &Observable<String> {
        &self.search_query
    }

    /// Loads the catalog (from cache when available).
    pub async fn load(&self) {
        let state = UiState::from_list(self.data.products().products().await);
        debug!(
            loaded = state.data().map_or(0, Vec::len),
            error = state.error_message(),
            "Catalog load finished"
        );
        self.products.set(state);
    }

    /// Pull-to-refresh: shows `Loading`, drops the cache and reloads.
    pub async fn refresh(&self) {
        debug!("Catalog refresh");
        self.products.set(UiState::Loading);
        self.data.products().invalidate().await;
        self.load().await;
    }

    /// Shows `Loading`, then loads again.
    pub async fn retry(&self) {
        debug!("Catalog retry");
        self.products.set(UiState::Loading);
        self.load().await;
    }

    pub fn update_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        debug!(query = %query, "Search query changed");
        self.search_query.set(query);
    }

    /// Loaded products matching the search query, in catalog order.
    ///
    /// Matching is case-insensitive over title, category and description. A
    /// blank query matches everything; nothing is visible until loaded.
    pub fn visible_products(&self) -> Vec<Product> {
        let UiState::Success(products) = self.products.get() else {
            return Vec::new();
        };

        let needle = self.search_query.get().trim().to_lowercase();
        if needle.is_empty() {
            return products;
        }
        products
            .into_iter()
            .filter(|product| product.matches(&needle))
            .collect()
    }

    /// Distinct categories of the loaded catalog, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        if let Some(products) = self.products.get().data() {
            for product in products {
                if !categories.contains(&product.category) {
                    categories.push(product.category.clone());
                }
            }
        }
        categories
    }

    /// Adds one unit to the shared cart.
    pub fn add_to_cart(&self, product: &Product) {
        self.cart.add_one(product);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
