//! Listing query: filter then sort.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};
use unidecode::unidecode;

/// Sort options for the product listing.
///
/// Every order is stable: products that compare equal keep their filtered
/// (catalog) order, so re-applying a sort is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Catalog order, no sorting.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
}

impl SortOrder {
    /// Every order, in selector order.
    pub const VARIANTS: [SortOrder; 4] = [
        SortOrder::Featured,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
    ];

    /// Selector value (e.g., "price-asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Name: A-Z",
        }
    }

    /// Sort products in place.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => products.sort_by_key(|p| p.price.amount),
            SortOrder::PriceDesc => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            SortOrder::NameAsc => products.sort_by_cached_key(|p| name_sort_key(&p.name)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "featured" => Ok(SortOrder::Featured),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name-asc" => Ok(SortOrder::NameAsc),
            _ => Err(CommerceError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Primary collation key for names.
///
/// Diacritics are folded (so "Điện thoại" sorts with "Dien thoai") and case
/// is ignored, which is the primary-strength ordering a locale comparison
/// gives for Latin-script names.
pub fn collation_key(name: &str) -> String {
    unidecode(name).to_lowercase()
}

/// Full name ordering: primary key, then accents, then case with lowercase
/// first ("apple" before "Apple").
fn name_sort_key(name: &str) -> (String, String, String) {
    let case_swapped = name
        .chars()
        .flat_map(|c| {
            let swapped: Vec<char> = if c.is_uppercase() {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            swapped
        })
        .collect();
    (collation_key(name), name.to_lowercase(), case_swapped)
}

/// Produce the listing for `catalog` under `criteria`.
///
/// Pure: the same catalog and criteria always give the same sequence.
pub fn apply<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let mut listing: Vec<&Product> = catalog.iter().filter(|p| criteria.matches(p)).collect();
    criteria.sort.sort(&mut listing);
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;
    use crate::ids::ProductId;
    use crate::money::Money;
    use crate::search::PriceBracket;

    fn product(id: u64, name: &str, brand: &str, category: &str, price: i64) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft::new(name, brand, Money::vnd(price), category, "/img"),
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Zeta", "Dell", "Laptop", 10_000_000),
            product(2, "alpha", "Apple", "Laptop", 25_000_000),
            product(3, "Beta", "Dell", "Tablet", 45_000_000),
            product(4, "gamma", "Apple", "Tablet", 25_000_000),
        ]
    }

    fn ids(listing: &[&Product]) -> Vec<u64> {
        listing.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_no_op_filter_is_projection() {
        let catalog = catalog();
        let listing = apply(&catalog, &FilterCriteria::new());
        assert_eq!(ids(&listing), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_explicit_all_criteria_is_projection() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_category("all")
            .with_brand("all")
            .with_price("all".parse().unwrap())
            .with_search("");
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filters_combine() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_brand("Apple")
            .with_category("Tablet");
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![4]);

        let criteria = FilterCriteria::new().with_price(PriceBracket::From20MTo40M);
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![2, 4]);

        let criteria = FilterCriteria::new().with_search("ETA");
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let catalog = vec![
            product(1, "Zeta", "x", "c", 1),
            product(2, "alpha", "x", "c", 1),
            product(3, "Beta", "x", "c", 1),
        ];
        let listing = apply(&catalog, &FilterCriteria::new().with_sort(SortOrder::NameAsc));
        let names: Vec<&str> = listing.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_name_sort_puts_lowercase_first_on_ties() {
        let catalog = vec![
            product(1, "Banana", "x", "c", 1),
            product(2, "Apple", "x", "c", 1),
            product(3, "apple", "x", "c", 1),
            product(4, "Apple", "x", "c", 2),
        ];
        let listing = apply(&catalog, &FilterCriteria::new().with_sort(SortOrder::NameAsc));
        assert_eq!(ids(&listing), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_name_sort_folds_diacritics() {
        let catalog = vec![
            product(1, "Ốp lưng", "x", "c", 1),
            product(2, "Điện thoại", "x", "c", 1),
            product(3, "Cáp sạc", "x", "c", 1),
        ];
        let listing = apply(&catalog, &FilterCriteria::new().with_sort(SortOrder::NameAsc));
        assert_eq!(ids(&listing), vec![3, 2, 1]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let catalog = catalog();
        let asc = apply(&catalog, &FilterCriteria::new().with_sort(SortOrder::PriceAsc));
        assert_eq!(ids(&asc), vec![1, 2, 4, 3]);

        let desc = apply(&catalog, &FilterCriteria::new().with_sort(SortOrder::PriceDesc));
        assert_eq!(ids(&desc), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_sort(SortOrder::PriceAsc);
        let mut once = apply(&catalog, &criteria);
        let expected = ids(&once);
        SortOrder::PriceAsc.sort(&mut once);
        assert_eq!(ids(&once), expected);
    }

    #[test]
    fn test_sort_parse() {
        for order in SortOrder::VARIANTS {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
        assert!("newest".parse::<SortOrder>().is_err());
    }
}
