//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_catalog::search::SortOption;
use shopfront_catalog::Currency;
use shopfront_data::LatencyConfig;
use shopfront_listing::ViewMode;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront defaults.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Simulated latency for the built-in catalog.
    #[serde(default)]
    pub latency: LatencySettings,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Defaults applied to every listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Currency the built-in catalog is priced in.
    #[serde(default)]
    pub currency: Currency,

    /// Initial layout.
    #[serde(default)]
    pub view: ViewMode,

    /// Initial sort order.
    #[serde(default)]
    pub sort: SortOption,

    /// JSON catalog to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            view: ViewMode::Grid,
            sort: SortOption::Featured,
            catalog: None,
        }
    }
}

/// Per-operation latency in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "default_list_ms")]
    pub list_ms: u64,

    #[serde(default = "default_by_id_ms")]
    pub by_id_ms: u64,

    #[serde(default = "default_by_category_ms")]
    pub by_category_ms: u64,
}

fn default_list_ms() -> u64 {
    800
}

fn default_by_id_ms() -> u64 {
    300
}

fn default_by_category_ms() -> u64 {
    500
}

impl LatencySettings {
    pub fn to_latency(self) -> LatencyConfig {
        LatencyConfig::new(
            Duration::from_millis(self.list_ms),
            Duration::from_millis(self.by_id_ms),
            Duration::from_millis(self.by_category_ms),
        )
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            list_ms: default_list_ms(),
            by_id_ms: default_by_id_ms(),
            by_category_ms: default_by_category_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CliConfig::parse("shopfront.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.latency.to_latency(), LatencyConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let content = r#"
            [storefront]
            currency = "EUR"
            view = "list"
            sort = "price-desc"
            catalog = "catalog.json"

            [latency]
            list_ms = 0
        "#;
        let config = CliConfig::parse("shopfront.toml", content).unwrap();
        assert_eq!(config.storefront.currency, Currency::EUR);
        assert_eq!(config.storefront.view, ViewMode::List);
        assert_eq!(config.storefront.sort, SortOption::PriceDesc);
        assert_eq!(config.storefront.catalog.as_deref(), Some("catalog.json"));
        assert_eq!(config.latency.list_ms, 0);
        assert_eq!(config.latency.by_id_ms, 300);
    }

    #[test]
    fn test_json_config() {
        let content = r#"{"storefront": {"sort": "popularity"}}"#;
        let config = CliConfig::parse("shopfront.json", content).unwrap();
        assert_eq!(config.storefront.sort, SortOption::Popularity);
        assert_eq!(config.storefront.view, ViewMode::Grid);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let err = CliConfig::parse("shopfront.toml", "[storefront]\nsort = \"cheapest\"").unwrap_err();
        assert!(format!("{:#}", err).contains("shopfront.toml"));
    }
}
