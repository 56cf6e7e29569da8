//! In-memory catalog store.

use std::collections::HashSet;

use crate::catalog::{Product, ProductDraft};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use serde::Serialize;

/// The append-only product catalog for one session.
///
/// Identifiers are assigned as `max existing id + 1` (1 for an empty
/// catalog), so they stay unique even when seed data is not sorted by id.
/// Insertion order is preserved and is the "featured" listing order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            products: Vec::new(),
        }
    }

    /// Create a catalog from an initial snapshot.
    ///
    /// Fails if two products share an id, a price is negative, or a price is
    /// not in `currency`.
    pub fn from_products(currency: Currency, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProductId(product.id));
            }
            if product.price.amount < 0 {
                return Err(CommerceError::InvalidPrice(product.price.amount));
            }
            check_currency(currency, product.price.currency)?;
        }
        tracing::debug!(count = products.len(), %currency, "catalog seeded");
        Ok(Self { currency, products })
    }

    /// The catalog currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The identifier the next added product will receive.
    ///
    /// Fails once a product holds `u64::MAX`.
    pub fn next_id(&self) -> Result<ProductId, CommerceError> {
        let max = self.products.iter().map(|p| p.id).max().unwrap_or_default();
        max.next().ok_or(CommerceError::IdsExhausted(max))
    }

    /// Append a product, assigning it the next identifier.
    ///
    /// Form validation is the caller's job (see [`ProductDraft::validate`]);
    /// the only check here is that the price is in the catalog currency.
    /// Duplicate names or brands are accepted.
    pub fn add(&mut self, draft: ProductDraft) -> Result<&Product, CommerceError> {
        check_currency(self.currency, draft.price.currency)?;

        let id = self.next_id()?;
        let product = Product::from_draft(id, draft);
        tracing::info!(product_id = %id, name = %product.name, "product added to catalog");

        let index = self.products.len();
        self.products.push(product);
        Ok(&self.products[index])
    }

    /// All products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it is absent.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn check_currency(expected: Currency, got: Currency) -> Result<(), CommerceError> {
    if expected == got {
        Ok(())
    } else {
        Err(CommerceError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: got.code().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn draft(name: &str, price: i64) -> ProductDraft {
        ProductDraft::new(name, "Dell", Money::vnd(price), "Laptop", "/img/x.png")
    }

    fn product(id: u64, name: &str) -> Product {
        Product::from_draft(ProductId::new(id), draft(name, 1_000))
    }

    #[test]
    fn test_add_to_empty_catalog_assigns_one() {
        let mut catalog = Catalog::new(Currency::VND);
        let added = catalog.add(draft("XPS 13", 30_000_000)).unwrap();
        assert_eq!(added.id, ProductId::new(1));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_uses_max_id_not_last_id() {
        let catalog = vec![product(5, "a"), product(2, "b"), product(3, "c")];
        let mut catalog = Catalog::from_products(Currency::VND, catalog).unwrap();
        let added = catalog.add(draft("XPS 15", 40_000_000)).unwrap();
        assert_eq!(added.id, ProductId::new(6));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut catalog = Catalog::new(Currency::VND);
        catalog.add(draft("first", 1)).unwrap();
        catalog.add(draft("second", 1)).unwrap();
        catalog.add(draft("first", 1)).unwrap();

        let names: Vec<&str> = catalog.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::from_products(Currency::VND, vec![product(4, "a")]).unwrap();
        assert!(catalog.get(ProductId::new(4)).is_some());
        assert_eq!(
            catalog.require(ProductId::new(9)),
            Err(CommerceError::ProductNotFound(ProductId::new(9)))
        );
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let result = Catalog::from_products(Currency::VND, vec![product(1, "a"), product(1, "b")]);
        assert_eq!(result, Err(CommerceError::DuplicateProductId(ProductId::new(1))));
    }

    #[test]
    fn test_negative_seed_price_rejected() {
        let mut cheap = product(2, "b");
        cheap.price = Money::vnd(-5);
        let result = Catalog::from_products(Currency::VND, vec![product(1, "a"), cheap]);
        assert_eq!(result, Err(CommerceError::InvalidPrice(-5)));

        let mut free = product(3, "c");
        free.price = Money::vnd(0);
        assert!(Catalog::from_products(Currency::VND, vec![free]).is_ok());
    }

    #[test]
    fn test_add_after_max_id_fails() {
        let mut catalog =
            Catalog::from_products(Currency::VND, vec![product(u64::MAX, "last")]).unwrap();
        assert_eq!(
            catalog.next_id(),
            Err(CommerceError::IdsExhausted(ProductId::new(u64::MAX)))
        );
        assert_eq!(
            catalog.add(draft("one more", 1_000)).err(),
            Some(CommerceError::IdsExhausted(ProductId::new(u64::MAX)))
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut catalog = Catalog::new(Currency::VND);
        let mut d = draft("MacBook", 99_900);
        d.price = Money::new(99_900, Currency::USD);
        assert!(matches!(
            catalog.add(d),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(catalog.is_empty());
    }
}
