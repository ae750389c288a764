//! # md3-state: Client State for the MD3 Shop
//!
//! The shared cart, screen view-models and the composition root that wires
//! them together.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Load Configuration ───────────────────────────────────────────────► │
//! │     • AppConfig::load_or_default (defaults → TOML → env)               │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • RUST_LOG, else config logging.filter, else info,md3=debug         │
//! │                                                                         │
//! │  3. Build the ApiService ─────────────────────────────────────────────► │
//! │     • FixtureApi::from_dir(catalog.fixtures_dir) or FixtureApi::sample  │
//! │                                                                         │
//! │  4. AppState::new(config, api) ───────────────────────────────────────► │
//! │     • one DataSource (repositories + caches)                           │
//! │     • one CartStore                                                     │
//! │                                                                         │
//! │  5. Screens ask AppState for their view-models ──────────────────────► │
//! │     • every view-model shares the same Arc<CartStore>                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`observable`] - Replay-last observable values
//! - [`cart`] - `CartStore`, the shared cart
//! - [`viewmodel`] - Catalog, product detail and cart view-models
//! - [`config`] - `AppConfig` loading
//! - [`error`] - State error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod observable;
pub mod viewmodel;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::{CartStore, CartTotals};
pub use config::AppConfig;
pub use error::{StateError, StateResult};
pub use observable::{Observable, Subscription};
pub use viewmodel::{CartViewModel, CatalogViewModel, CheckoutReceipt, ProductDetailViewModel};

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use md3_data::{ApiService, DataSource, FixtureApi};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,md3=debug";

/// Owns the app-wide singletons: config, data source and cart.
///
/// ```rust
/// use md3_data::FixtureApi;
/// use md3_state::{AppConfig, AppState};
///
/// let app = AppState::new(AppConfig::default(), FixtureApi::empty());
/// let catalog = app.catalog();
/// let cart_screen = app.cart_view_model();
///
/// assert_eq!(cart_screen.total_item_count(), 0);
/// # drop(catalog);
/// ```
pub struct AppState<S> {
    config: AppConfig,
    data: Arc<DataSource<S>>,
    cart: Arc<CartStore>,
}

impl<S: ApiService> AppState<S> {
    pub fn new(config: AppConfig, api: S) -> Self {
        info!(store = %config.store.name, "App state initialized");
        AppState {
            config,
            data: Arc::new(DataSource::new(api)),
            cart: Arc::new(CartStore::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn data(&self) -> &Arc<DataSource<S>> {
        &self.data
    }

    /// The shared cart.
    pub fn cart(&self) -> &Arc<CartStore> {
        &self.cart
    }

    pub fn catalog(&self) -> CatalogViewModel<S> {
        CatalogViewModel::new(self.data.clone(), self.cart.clone())
    }

    pub fn product_detail(&self) -> ProductDetailViewModel<S> {
        ProductDetailViewModel::new(self.data.clone(), self.cart.clone())
    }

    pub fn cart_view_model(&self) -> CartViewModel {
        CartViewModel::new(self.cart.clone())
    }
}

impl AppState<FixtureApi> {
    /// Builds the app over the fixture directory named in `config`, or the
    /// bundled sample catalog when none is configured.
    pub fn from_config(config: AppConfig) -> StateResult<Self> {
        let api = match &config.catalog.fixtures_dir {
            Some(dir) => FixtureApi::from_dir(dir)?,
            None => FixtureApi::sample()?,
        };
        Ok(AppState::new(config, api))
    }
}

/// Initializes the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=md3=trace` - Show trace for md3 crates only
/// - Otherwise `config_filter`, then [`DEFAULT_LOG_FILTER`]
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
