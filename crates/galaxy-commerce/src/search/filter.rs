//! Filter criteria for the product listing.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::SortOrder;
use serde::{Deserialize, Serialize};

/// Sentinel used by the category and brand selectors for "no filter".
pub const ALL: &str = "all";

/// Lower bracket threshold, in minor units (20,000,000 dong).
pub const BRACKET_LOW: i64 = 20_000_000;

/// Upper bracket threshold, in minor units (40,000,000 dong).
pub const BRACKET_HIGH: i64 = 40_000_000;

/// Price bracket filter.
///
/// `Below20M` is strict (`< 20M`), `From20MTo40M` is inclusive on both
/// ends, `Above40M` is strict (`> 40M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceBracket {
    #[default]
    All,
    Below20M,
    From20MTo40M,
    Above40M,
}

impl PriceBracket {
    /// Every bracket, in selector order.
    pub const VARIANTS: [PriceBracket; 4] = [
        PriceBracket::All,
        PriceBracket::Below20M,
        PriceBracket::From20MTo40M,
        PriceBracket::Above40M,
    ];

    /// Check whether a price falls inside this bracket.
    pub fn contains(&self, price: &Money) -> bool {
        let amount = price.amount;
        match self {
            PriceBracket::All => true,
            PriceBracket::Below20M => amount < BRACKET_LOW,
            PriceBracket::From20MTo40M => (BRACKET_LOW..=BRACKET_HIGH).contains(&amount),
            PriceBracket::Above40M => amount > BRACKET_HIGH,
        }
    }

    /// Selector value (e.g., "lt20").
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBracket::All => "all",
            PriceBracket::Below20M => "lt20",
            PriceBracket::From20MTo40M => "20-40",
            PriceBracket::Above40M => "gt40",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBracket::All => "All prices",
            PriceBracket::Below20M => "Under 20.000.000 \u{20ab}",
            PriceBracket::From20MTo40M => "20.000.000 \u{20ab} - 40.000.000 \u{20ab}",
            PriceBracket::Above40M => "Over 40.000.000 \u{20ab}",
        }
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBracket {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PriceBracket::All),
            "lt20" => Ok(PriceBracket::Below20M),
            "20-40" => Ok(PriceBracket::From20MTo40M),
            "gt40" => Ok(PriceBracket::Above40M),
            _ => Err(CommerceError::UnknownPriceBracket(s.to_string())),
        }
    }
}

/// Everything that shapes the product listing.
///
/// `None` for category or brand means "all". The default value filters
/// nothing and keeps catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact category match.
    pub category: Option<String>,
    /// Exact brand match.
    pub brand: Option<String>,
    /// Price bracket.
    pub price: PriceBracket,
    /// Case-insensitive substring of the product name; empty means no filter.
    pub search: String,
    /// Order applied after filtering.
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Criteria that match everything in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter; [`ALL`] clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = selection(category.into());
        self
    }

    /// Set the brand filter; [`ALL`] clears it.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = selection(brand.into());
        self
    }

    /// Set the price bracket.
    pub fn with_price(mut self, price: PriceBracket) -> Self {
        self.price = price;
        self
    }

    /// Set the free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Category selector value, [`ALL`] when unset.
    pub fn category_value(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL)
    }

    /// Brand selector value, [`ALL`] when unset.
    pub fn brand_value(&self) -> &str {
        self.brand.as_deref().unwrap_or(ALL)
    }

    /// Check whether no filter is active (sorting aside).
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none()
            && self.brand.is_none()
            && self.price == PriceBracket::All
            && self.search.is_empty()
    }

    /// Check a product against category, brand, price and search, in that order.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if &product.brand != brand {
                return false;
            }
        }
        if !self.price.contains(&product.price) {
            return false;
        }
        matches_search(&product.name, &self.search)
    }
}

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

fn selection(value: String) -> Option<String> {
    if value == ALL {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        let at_low = Money::vnd(BRACKET_LOW);
        let at_high = Money::vnd(BRACKET_HIGH);

        assert!(!PriceBracket::Below20M.contains(&at_low));
        assert!(PriceBracket::From20MTo40M.contains(&at_low));
        assert!(PriceBracket::From20MTo40M.contains(&at_high));
        assert!(!PriceBracket::Above40M.contains(&at_high));

        assert!(PriceBracket::Below20M.contains(&Money::vnd(BRACKET_LOW - 1)));
        assert!(PriceBracket::Above40M.contains(&Money::vnd(BRACKET_HIGH + 1)));
    }

    #[test]
    fn test_bracket_parse() {
        for bracket in PriceBracket::VARIANTS {
            assert_eq!(bracket.as_str().parse::<PriceBracket>().unwrap(), bracket);
        }
        assert_eq!(
            "cheap".parse::<PriceBracket>(),
            Err(CommerceError::UnknownPriceBracket("cheap".to_string()))
        );
    }

    #[test]
    fn test_all_sentinel_clears_selection() {
        let criteria = FilterCriteria::new().with_category("Laptop").with_brand(ALL);
        assert_eq!(criteria.category.as_deref(), Some("Laptop"));
        assert_eq!(criteria.brand, None);
        assert_eq!(criteria.brand_value(), "all");

        let criteria = criteria.with_category(ALL);
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("MacBook Air", "macbook"));
        assert!(matches_search("MacBook Air", "AIR"));
        assert!(matches_search("MacBook Air", ""));
        assert!(!matches_search("MacBook Air", "pro"));
    }
}
