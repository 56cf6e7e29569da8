//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use galaxy_commerce::prelude::Catalog;
use galaxy_observability::LoggingConfig;
use galaxy_storefront::StoreConfig;
use serde::{Deserialize, Serialize};

/// Configuration file (`galaxy.toml` or `galaxy.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Load a seed catalog file, picking the format by extension.
pub fn load_seed(config: &StoreConfig, path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let catalog = if is_json(path) {
        Catalog::from_json_str(config.currency, &content)
    } else {
        Catalog::from_toml_str(config.currency, &content)
    };
    catalog.with_context(|| format!("Invalid seed file: {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Generate a default galaxy.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# TechGalaxy storefront configuration

[store]
name = "{name}"
currency = "VND"
open_cart_on_add = true
# seed = "products.toml"

[logging]
level = "info"
format = "human"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_commerce::Currency;
    use galaxy_observability::{LogFormat, LogLevel};

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store.name, "TechGalaxy");
        assert_eq!(config.store.currency, Currency::VND);
        assert!(config.store.open_cart_on_add);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config("My Shop")).unwrap();
        assert_eq!(config.store.name, "My Shop");
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(config.store.seed.is_none());
    }

    #[test]
    fn test_partial_json_config() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"store": {"open_cart_on_add": false}}"#).unwrap();
        assert!(!config.store.open_cart_on_add);
        assert_eq!(config.store.name, "TechGalaxy");
    }
}
