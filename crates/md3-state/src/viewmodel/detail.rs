//! Product detail screen.

use std::sync::Arc;

use tracing::debug;

use md3_core::{Product, ProductId, UiState};
use md3_data::{ApiService, DataSource};

use crate::cart::CartStore;
use crate::observable::Observable;

pub struct ProductDetailViewModel<S> {
    data: Arc<DataSource<S>>,
    cart: Arc<CartStore>,
    product: Observable<UiState<Product>>,
    show_bottom_sheet: Observable<bool>,
}

impl<S: ApiService> ProductDetailViewModel<S> {
    pub fn new(data: Arc<DataSource<S>>, cart: Arc<CartStore>) -> Self {
        ProductDetailViewModel {
            data,
            cart,
            product: Observable::new(UiState::Loading),
            show_bottom_sheet: Observable::new(false),
        }
    }

    pub fn product(&self) -> &Observable<UiState<Product>> {
        &self.product
    }

    /// Whether the actions bottom sheet is open.
    pub fn show_bottom_sheet(&self) -> &Observable<bool> {
        &self.show_bottom_sheet
    }

    pub async fn load(&self, product_id: ProductId) {
        let state = UiState::from(self.data.products().product(product_id).await);
        debug!(product_id, error = state.error_message(), "Product detail loaded");
        self.product.set(state);
    }

    /// Shows `Loading`, then loads again.
    pub async fn retry(&self, product_id: ProductId) {
        self.product.set(UiState::Loading);
        self.load(product_id).await;
    }

    pub fn show_action_bottom_sheet(&self) {
        self.show_bottom_sheet.set(true);
    }

    pub fn hide_bottom_sheet(&self) {
        self.show_bottom_sheet.set(false);
    }

    /// Adds `quantity` of the displayed product to the shared cart.
    ///
    /// Returns `false` (and leaves the cart alone) while no product is
    /// loaded.
    pub fn add_to_cart(&self, quantity: i64) -> bool {
        match self.product.get() {
            UiState::Success(product) => {
                self.cart.add_item(&product, quantity);
                true
            }
            _ => {
                debug!("add_to_cart ignored, no product loaded");
                false
            }
        }
    }
}
