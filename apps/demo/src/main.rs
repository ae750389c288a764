//! MD3 shop demo.
//!
//! Runs one shopping session against fixture data: browse the catalog,
//! search, open a product, add to the cart from two screens, adjust the
//! cart and check out.
//!
//! ```text
//! md3-demo [CONFIG_PATH]
//! ```
//!
//! Without `CONFIG_PATH` the platform config file is used if present.

use std::error::Error;
use std::path::PathBuf;

use tracing::{info, warn};

use md3_core::{CartSnapshot, UiState};
use md3_state::{init_tracing, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_or_default(std::env::args().nth(1).map(PathBuf::from));
    init_tracing(config.logging.filter.as_deref());

    info!(store = %config.store.name, "Starting MD3 shop demo");

    let app = AppState::from_config(config)?;
    let catalog = app.catalog();
    let detail = app.product_detail();
    let cart = app.cart_view_model();

    let _cart_log = app.cart().subscribe(|snapshot: &CartSnapshot| {
        info!(
            lines = snapshot.line_count(),
            items = snapshot.total_item_count(),
            total = %snapshot.total_price(),
            "Cart changed"
        );
    });

    catalog.load().await;
    let products = match catalog.products().get() {
        UiState::Success(products) => products,
        UiState::Empty => {
            warn!("Catalog is empty, nothing to shop for");
            return Ok(());
        }
        UiState::Error(message) => return Err(message.into()),
        UiState::Loading => return Err("catalog did not finish loading".into()),
    };
    info!(
        products = products.len(),
        categories = ?catalog.categories(),
        "Catalog loaded"
    );

    catalog.update_search_query("men");
    for product in catalog.visible_products() {
        info!(id = product.id, title = %product.title, "Search hit");
    }
    catalog.update_search_query("");

    let first = &products[0];
    catalog.add_to_cart(first);

    detail.load(first.id).await;
    detail.show_action_bottom_sheet();
    detail.add_to_cart(2);
    detail.hide_bottom_sheet();

    if let Some(second) = products.get(1) {
        catalog.add_to_cart(second);
        cart.update_quantity(second.id, 3);
    }
    cart.update_quantity(first.id, 1);

    let totals = cart.totals();
    info!(
        lines = totals.line_count,
        items = totals.item_count,
        total = %app.config().format_money(totals.total_price),
        "Ready to check out"
    );

    let receipt = cart.checkout();
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    cart.dismiss_checkout_success();

    Ok(())
}
