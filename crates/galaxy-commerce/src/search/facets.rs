//! Facets for the category sidebar and brand selector.

use crate::catalog::Product;
use crate::search::ALL;
use serde::{Deserialize, Serialize};

/// A terms facet (e.g., all brands with their product counts).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Brand").
    pub name: String,
    /// Facet values, in first-seen order.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Collect the distinct values of `field` over `products`.
    ///
    /// `selected` is the current selector value; [`ALL`] marks nothing.
    pub fn terms<'a, F>(
        name: impl Into<String>,
        products: impl IntoIterator<Item = &'a Product>,
        field: F,
        selected: &str,
    ) -> Self
    where
        F: Fn(&Product) -> &str,
    {
        let mut values: Vec<FacetValue> = Vec::new();
        for product in products {
            let value = field(product);
            match values.iter_mut().find(|v| v.value == value) {
                Some(existing) => existing.count += 1,
                None => values.push(FacetValue {
                    value: value.to_string(),
                    count: 1,
                    selected: selected != ALL && selected == value,
                }),
            }
        }
        Self {
            name: name.into(),
            values,
        }
    }

    /// Selector options: [`ALL`] followed by each distinct value.
    pub fn options(&self) -> Vec<&str> {
        std::iter::once(ALL)
            .chain(self.values.iter().map(|v| v.value.as_str()))
            .collect()
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of products with this value.
    pub count: i64,
    /// Whether currently selected.
    pub selected: bool,
}

/// Category facet over a product set (the storefront uses the full catalog).
pub fn category_facet<'a>(products: impl IntoIterator<Item = &'a Product>, selected: &str) -> Facet {
    Facet::terms("Category", products, |p| p.category.as_str(), selected)
}

/// Brand facet over a product set (the storefront uses the searched products).
pub fn brand_facet<'a>(products: impl IntoIterator<Item = &'a Product>, selected: &str) -> Facet {
    Facet::terms("Brand", products, |p| p.brand.as_str(), selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn product(id: u64, brand: &str, category: &str) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft::new("p", brand, Money::vnd(1), category, "/img"),
        )
    }

    #[test]
    fn test_terms_first_seen_order_with_counts() {
        let products = vec![
            product(1, "Dell", "Laptop"),
            product(2, "Apple", "Tablet"),
            product(3, "Dell", "Laptop"),
        ];
        let facet = brand_facet(&products, "Apple");
        assert_eq!(facet.options(), vec!["all", "Dell", "Apple"]);
        assert_eq!(facet.values[0].count, 2);
        assert!(!facet.values[0].selected);
        assert!(facet.values[1].selected);
    }

    #[test]
    fn test_all_selects_nothing() {
        let products = vec![product(1, "Dell", "Laptop")];
        let facet = category_facet(&products, ALL);
        assert!(facet.values.iter().all(|v| !v.selected));
    }
}
