//! Store configuration.

use std::path::PathBuf;

use galaxy_commerce::Currency;
use serde::{Deserialize, Serialize};

/// The `[store]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_name")]
    pub name: String,

    /// Catalog currency.
    #[serde(default)]
    pub currency: Currency,

    /// Open the cart panel whenever something is added to the cart.
    #[serde(default = "default_open_cart_on_add")]
    pub open_cart_on_add: bool,

    /// Seed catalog file (TOML or JSON). The built-in catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

fn default_name() -> String {
    "TechGalaxy".to_string()
}

fn default_open_cart_on_add() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: Currency::default(),
            open_cart_on_add: default_open_cart_on_add(),
            seed: None,
        }
    }
}
