//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod facets;
pub mod shell;
pub mod show;

use clap::{Args, Subcommand};
use galaxy_commerce::prelude::{FilterCriteria, PriceBracket, ProductId, SortOrder, ALL};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show ("all" for every category).
    #[arg(short, long, default_value = ALL)]
    pub category: String,

    /// Brand to show ("all" for every brand).
    #[arg(short, long, default_value = ALL)]
    pub brand: String,

    /// Price bracket: all, lt20, 20-40 or gt40.
    #[arg(short, long, default_value = "all")]
    pub price: PriceBracket,

    /// Sort order: featured, price-asc, price-desc or name-asc.
    #[arg(short, long, default_value = "featured")]
    pub sort: SortOrder,

    /// Case-insensitive text to look for in product names.
    #[arg(long, default_value = "")]
    pub search: String,
}

impl BrowseArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_category(self.category.clone())
            .with_brand(self.brand.clone())
            .with_price(self.price)
            .with_sort(self.sort)
            .with_search(self.search.clone())
    }
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add one unit of a product (repeatable).
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<ProductId>,

    /// Set a quantity, e.g. `--set 2=3` (repeatable; 0 removes).
    #[arg(long = "set", value_name = "ID=QTY", value_parser = parse_quantity)]
    pub set: Vec<(ProductId, i64)>,

    /// Remove a product (repeatable).
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<ProductId>,

    /// Check out after applying the changes.
    #[arg(long)]
    pub checkout: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Store name.
        #[arg(short, long, default_value = "TechGalaxy")]
        name: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse an `ID=QTY` pair.
pub fn parse_quantity(s: &str) -> Result<(ProductId, i64), String> {
    let (id, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", s))?;
    let id = id
        .parse::<ProductId>()
        .map_err(|e| format!("invalid product id '{}': {}", id, e))?;
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
    Ok((id, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2=3"), Ok((ProductId::new(2), 3)));
        assert_eq!(parse_quantity(" 7 = 0"), Ok((ProductId::new(7), 0)));
        assert!(parse_quantity("2").is_err());
        assert!(parse_quantity("x=1").is_err());
        assert!(parse_quantity("2=many").is_err());
    }

    #[test]
    fn test_browse_criteria_maps_all_to_none() {
        let args = BrowseArgs {
            category: ALL.to_string(),
            brand: "Apple".to_string(),
            price: PriceBracket::Below20M,
            sort: SortOrder::NameAsc,
            search: String::new(),
        };
        let criteria = args.criteria();
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.brand.as_deref(), Some("Apple"));
        assert_eq!(criteria.price, PriceBracket::Below20M);
    }
}
