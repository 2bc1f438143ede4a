//! # Configuration
//!
//! Stockz configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **CLI flags**: `--min-quantity`, `--debounce-ms`.
//! 2. **Environment variables**: `STOCKZ__MIN_QUANTITY`, `STOCKZ__DEBOUNCE_DELAY_MS`, etc.
//! 3. **Local Config**: `./stockz.toml` in the working directory.
//! 4. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Configuration is the only thing stockz reads from disk. Stock itself is never
//! persisted.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `min_quantity` | `1` | Smallest quantity accepted by the form and by edits |
//! | `debounce_delay_ms` | `300` | Quiet time before a search input is applied |
//! | `action_cooldown_ms` | `500` | How long an edit/delete control stays disabled after a click |
//! | `open_stock_section` | `true` | Whether the stock table starts expanded |

use crate::error::{Result, StockzError};
use clapfig::{Clapfig, SearchMode, SearchPath};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "stockz.toml";

/// Configuration for stockz, stored in `stockz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockzConfig {
    /// Smallest quantity accepted when adding or editing a product.
    #[config(default = 1.0)]
    pub min_quantity: f64,

    /// Milliseconds of quiet typing before the search filter runs.
    #[config(default = 300)]
    pub debounce_delay_ms: u64,

    /// Milliseconds an edit/delete control stays disabled after activation.
    #[config(default = 500)]
    pub action_cooldown_ms: u64,

    /// Whether the stock section starts expanded.
    #[config(default = true)]
    pub open_stock_section: bool,
}

impl Default for StockzConfig {
    fn default() -> Self {
        Self {
            min_quantity: 1.0,
            debounce_delay_ms: 300,
            action_cooldown_ms: 500,
            open_stock_section: true,
        }
    }
}

impl StockzConfig {
    /// Loads configuration from the global config dir and `cwd`, project values winning.
    ///
    /// A broken or missing file falls back to defaults; configuration is never
    /// a reason to refuse to start.
    pub fn load(cwd: &Path) -> Self {
        let mut search_paths = Vec::new();
        if let Some(dirs) = ProjectDirs::from("com", "stockz", "stockz") {
            search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
        }
        search_paths.push(SearchPath::Path(cwd.to_path_buf()));

        match Clapfig::builder::<StockzConfig>()
            .app_name("stockz")
            .file_name(CONFIG_FILE_NAME)
            .search_paths(search_paths)
            .search_mode(SearchMode::Merge)
            .load()
        {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "invalid configuration, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to load configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Checks values the stock rules depend on.
    ///
    /// The minimum quantity must be finite and not negative; anything else would
    /// let the form store negative or unbounded stock.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_minimum(self.min_quantity) {
            return Err(StockzError::Config(format!(
                "min_quantity must be a finite number >= 0, got {}",
                self.min_quantity
            )));
        }
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn action_cooldown(&self) -> Duration {
        Duration::from_millis(self.action_cooldown_ms)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, min_quantity: Option<f64>, debounce_ms: Option<u64>) -> Self {
        if let Some(min) = min_quantity {
            if is_valid_minimum(min) {
                self.min_quantity = min;
            } else {
                tracing::warn!(min_quantity = min, "ignoring invalid minimum quantity override");
            }
        }
        if let Some(ms) = debounce_ms {
            self.debounce_delay_ms = ms;
        }
        self
    }
}

fn is_valid_minimum(min: f64) -> bool {
    min.is_finite() && min >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StockzConfig::default();
        assert_eq!(config.min_quantity, 1.0);
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.action_cooldown(), Duration::from_millis(500));
        assert!(config.open_stock_section);
    }

    #[test]
    fn test_overrides() {
        let config = StockzConfig::default().with_overrides(Some(0.5), Some(50));
        assert_eq!(config.min_quantity, 0.5);
        assert_eq!(config.debounce_delay_ms, 50);
        assert_eq!(config.action_cooldown_ms, 500);
    }

    #[test]
    fn test_no_overrides_keeps_values() {
        let config = StockzConfig::default().with_overrides(None, None);
        assert_eq!(config, StockzConfig::default());
    }

    #[test]
    fn test_toml_roundtrip_keys() {
        let config = StockzConfig {
            min_quantity: 2.0,
            debounce_delay_ms: 100,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("min_quantity = 2.0"));
        assert!(text.contains("debounce_delay_ms = 100"));

        let parsed: StockzConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "min_quantity = 3.0\naction_cooldown_ms = 10\n",
        )
        .unwrap();

        let config = StockzConfig::load(dir.path());
        assert_eq!(config.min_quantity, 3.0);
        assert_eq!(config.action_cooldown_ms, 10);
        assert_eq!(config.debounce_delay_ms, 300);
    }

    #[test]
    fn test_validate_rejects_bad_minimum() {
        for min in [-5.0, f64::NAN, f64::INFINITY] {
            let config = StockzConfig {
                min_quantity: min,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(StockzError::Config(_))));
        }
        let zero = StockzConfig {
            min_quantity: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_load_falls_back_on_negative_minimum() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "min_quantity = -5.0\n").unwrap();

        let config = StockzConfig::load(dir.path());
        assert_eq!(config.min_quantity, 1.0);
    }

    #[test]
    fn test_invalid_override_is_ignored() {
        let config = StockzConfig::default().with_overrides(Some(-3.0), None);
        assert_eq!(config.min_quantity, 1.0);
        let config = StockzConfig::default().with_overrides(Some(f64::NAN), None);
        assert_eq!(config.min_quantity, 1.0);
    }
}
