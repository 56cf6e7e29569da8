//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use galaxy_commerce::prelude::Catalog;
use galaxy_storefront::Storefront;

use crate::config::{self, StorefrontConfig};
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["galaxy.toml", ".galaxy.toml", "galaxy.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (StorefrontConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StorefrontConfig::load(&config_path) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// The configured seed catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.store.seed {
            Some(seed) => {
                let path = self.resolve_path(seed);
                self.output.debug(&format!("Loading seed catalog from {}", path.display()));
                config::load_seed(&self.config.store, &path)
            }
            None => Catalog::builtin_for(self.config.store.currency).with_context(|| {
                format!(
                    "No seed catalog configured for currency {}; set store.seed",
                    self.config.store.currency
                )
            }),
        }
    }

    /// A fresh storefront session over the configured catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        Ok(Storefront::new(self.config.store.clone(), self.catalog()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_commerce::Currency;

    fn context(config: StorefrontConfig) -> Context {
        Context {
            config,
            config_path: None,
            output: Output::new(false, false),
            cwd: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_builtin_catalog_for_default_store() {
        let catalog = context(StorefrontConfig::default()).catalog().unwrap();
        assert_eq!(catalog.currency(), Currency::VND);
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_non_dong_store_needs_seed() {
        let mut config = StorefrontConfig::default();
        config.store.currency = Currency::USD;
        let err = context(config).catalog().unwrap_err();
        assert!(err.to_string().contains("set store.seed"));
    }
}
