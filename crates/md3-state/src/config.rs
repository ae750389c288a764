//! # App Configuration
//!
//! Settings loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                                │
//! │  2. Config file                                                         │
//! │     explicit path, or                                                   │
//! │     ~/.config/md3demo/config.toml (Linux)                               │
//! │     ~/Library/Application Support/com.md3demo.shop/config.toml (macOS) │
//! │  3. Environment variables                                               │
//! │     MD3_STORE_NAME     store.name                                       │
//! │     MD3_FIXTURES_DIR   catalog.fixtures_dir                             │
//! │     MD3_LOG            logging.filter                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! [store]
//! name = "MD3 Shop"
//! currency_symbol = "$"
//! currency_decimals = 2
//!
//! [catalog]
//! fixtures_dir = "./fixtures"
//!
//! [logging]
//! filter = "info,md3=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use md3_core::Money;

use crate::error::{StateError, StateResult};

/// Largest supported `currency_decimals`.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shown in the top app bar and on receipts
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Number of decimal places for currency
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u8,
}

fn default_store_name() -> String {
    "MD3 Shop".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
        }
    }
}

/// Where catalog data comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of fixture JSON files. `None` uses the bundled sample.
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` still wins when set.
    #[serde(default)]
    pub filter: Option<String>,
}

// =============================================================================
// AppConfig
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; a file that exists but does not parse
    /// is.
    pub fn load(config_path: Option<PathBuf>) -> StateResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without applying environment overrides.
    pub fn from_file(path: &Path) -> StateResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn validate(&self) -> StateResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(StateError::InvalidConfig(
                "store.name must not be empty".into(),
            ));
        }

        if self.store.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(StateError::InvalidConfig(format!(
                "store.currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.store.currency_decimals
            )));
        }

        if let Some(filter) = &self.logging.filter {
            EnvFilter::try_new(filter).map_err(|e| {
                StateError::InvalidConfig(format!("logging.filter {:?}: {}", filter, e))
            })?;
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup` (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("MD3_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(dir) = lookup("MD3_FIXTURES_DIR") {
            debug!(fixtures_dir = %dir, "Overriding fixtures dir from environment");
            self.catalog.fixtures_dir = Some(PathBuf::from(dir));
        }

        if let Some(filter) = lookup("MD3_LOG") {
            self.logging.filter = Some(filter);
        }
    }

    /// Platform config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "md3demo", "shop")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Formats a cent amount with the configured symbol and decimals.
    ///
    /// `cents` is always hundredths of the major unit; it is rescaled to
    /// `currency_decimals` places, rounding half away from zero when fewer
    /// than two are shown.
    ///
    /// ## Example
    /// ```rust
    /// use md3_state::AppConfig;
    ///
    /// let mut config = AppConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    ///
    /// config.store.currency_decimals = 0;
    /// assert_eq!(config.format_currency(1250), "$13");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = u32::from(self.store.currency_decimals.min(MAX_CURRENCY_DECIMALS));
        let minor = rescale_cents(cents, decimals);

        let divisor = 10_i128.pow(decimals);
        let whole = (minor / divisor).abs();
        let frac = (minor % divisor).abs();
        let sign = if minor < 0 { "-" } else { "" };

        if decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.store.currency_symbol,
                whole,
                frac,
                width = decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.store.currency_symbol, whole)
        }
    }

    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.cents())
    }
}

/// Converts hundredths to `decimals` minor digits.
fn rescale_cents(cents: i64, decimals: u32) -> i128 {
    let cents = i128::from(cents);
    if decimals >= 2 {
        return cents * 10_i128.pow(decimals - 2);
    }

    let divisor = 10_i128.pow(2 - decimals);
    let quotient = cents / divisor;
    let remainder = cents % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + cents.signum()
    } else {
        quotient
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(-5), "-$0.05");
    }

    #[test]
    fn test_format_currency_other_settings() {
        let mut config = AppConfig::default();
        config.store.currency_symbol = "¥".to_string();
        config.store.currency_decimals = 0;
        assert_eq!(config.format_currency(1500), "¥15");
        assert_eq!(config.format_money(Money::from_cents(1234)), "¥12");

        config.store.currency_symbol = "€".to_string();
        config.store.currency_decimals = 3;
        assert_eq!(config.format_money(Money::from_cents(1500)), "€15.000");
        assert_eq!(config.format_currency(-1234), "-€12.340");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        let mut config = AppConfig::default();
        config.store.currency_decimals = 0;
        assert_eq!(config.format_currency(1250), "$13");
        assert_eq!(config.format_currency(1249), "$12");
        assert_eq!(config.format_currency(-1250), "-$13");
        assert_eq!(config.format_currency(49), "$0");

        config.store.currency_decimals = 1;
        assert_eq!(config.format_currency(1234), "$12.3");
        assert_eq!(config.format_currency(1235), "$12.4");
        assert_eq!(config.format_currency(-5), "-$0.1");
    }

    #[test]
    fn test_format_currency_extremes() {
        let mut config = AppConfig::default();
        config.store.currency_decimals = MAX_CURRENCY_DECIMALS;
        assert_eq!(
            config.format_money(Money::from_cents(i64::MAX)),
            "$92233720368547758.0700"
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(dir.path().join("absent.toml"))).unwrap();

        let mut expected = AppConfig::default();
        expected.apply_env_overrides();
        assert_eq!(config, expected);
        assert_eq!(config.store.currency_decimals, 2);
        assert_eq!(config.store.currency_symbol, "$");
    }

    #[test]
    fn test_from_file_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_lookup_changes_nothing() {
        let mut config = AppConfig::default();
        config.apply_overrides(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[store]\nname = \"Corner Shop\"\n\n[catalog]\nfixtures_dir = \"/srv/fixtures\"\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.store.currency_symbol, "$");
        assert_eq!(config.store.currency_decimals, 2);
        assert_eq!(
            config.catalog.fixtures_dir,
            Some(PathBuf::from("/srv/fixtures"))
        );
        assert_eq!(config.logging.filter, None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\nname = ").unwrap();

        let err = AppConfig::load(Some(path)).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\nname = \"\"\n").unwrap();

        let config = AppConfig::load_or_default(Some(path));
        assert_eq!(config.store.name, default_store_name());
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let env: HashMap<&str, &str> = [
            ("MD3_STORE_NAME", "Env Shop"),
            ("MD3_FIXTURES_DIR", "/tmp/fx"),
            ("MD3_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.store.name = "File Shop".to_string();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.name, "Env Shop");
        assert_eq!(config.catalog.fixtures_dir, Some(PathBuf::from("/tmp/fx")));
        assert_eq!(config.logging.filter.as_deref(), Some("warn"));
    }

    #[test]
    fn test_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let mut config = AppConfig::default();
        config.store.currency_decimals = 9;
        assert!(matches!(
            config.validate(),
            Err(StateError::InvalidConfig(_))
        ));

        let mut config = AppConfig::default();
        config.store.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.filter = Some("info,md3=debug".to_string());
        assert!(config.validate().is_ok());
    }
}
