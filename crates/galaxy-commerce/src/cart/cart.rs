//! Cart and cart item types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Entries are keyed by product id (at most one per product) and kept in
/// the order products were first added. Quantities are always at least 1:
/// any operation that would take an entry to zero or below removes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Cart currency, taken from the catalog.
    pub currency: Currency,
    /// Items in the cart.
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry, or appends a new entry with quantity 1.
    /// Returns the entry's new quantity.
    pub fn add_or_increment(&mut self, product: &Product) -> i64 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(product_id = %product.id, quantity = existing.quantity, "cart item incremented");
            return existing.quantity;
        }

        self.items.push(CartItem::new(product.clone()));
        tracing::debug!(product_id = %product.id, quantity = 1, "cart item added");
        1
    }

    /// Set an entry's quantity.
    ///
    /// A quantity of zero or below removes the entry. Absent ids are a no-op.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                tracing::debug!(product_id = %product_id, quantity, "cart quantity updated");
                true
            }
            _ => false,
        }
    }

    /// Increase an entry's quantity by one. Absent ids are a no-op.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(quantity) => self.set_quantity(product_id, quantity.saturating_add(1)),
            None => false,
        }
    }

    /// Decrease an entry's quantity by one, removing it at zero.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(quantity) => self.set_quantity(product_id, quantity - 1),
            None => false,
        }
    }

    /// Remove an entry. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, "cart item removed");
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all entries (the cart badge number).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct entries.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an entry by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Quantity of a product in the cart, if present.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.get(product_id).map(|i| i.quantity)
    }

    /// Sum of `price * quantity` over all entries.
    ///
    /// Saturates instead of overflowing; see [`Cart::try_total`] for the checked form.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| {
                acc.saturating_add(&item.subtotal_saturating())
            })
    }

    /// Checked form of [`Cart::total`].
    pub fn try_total(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .items
            .iter()
            .map(CartItem::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Per-line breakdown plus count and total.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .items
                .iter()
                .map(|item| LineSummary {
                    product_id: item.product.id,
                    name: item.product.name.clone(),
                    brand: item.product.brand.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    subtotal: item.subtotal_saturating(),
                })
                .collect(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

/// A cart entry: a product snapshot plus its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product as it was when first added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// `price * quantity`, failing on overflow.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    fn subtotal_saturating(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;

    fn product(id: u64, price: i64) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft::new(format!("Product {}", id), "Brand", Money::vnd(price), "Laptop", "/img"),
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::VND);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::vnd(0));
    }

    #[test]
    fn test_add_new_product_inserts_quantity_one() {
        let mut cart = Cart::new(Currency::VND);
        assert_eq!(cart.add_or_increment(&product(1, 1000)), 1);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new(Currency::VND);
        let p = product(1, 1000);
        cart.add_or_increment(&p);
        assert_eq!(cart.add_or_increment(&p), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_new_entries_are_appended() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(3, 1));
        cart.add_or_increment(&product(1, 1));
        cart.add_or_increment(&product(3, 1));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut a = Cart::new(Currency::VND);
        a.add_or_increment(&product(1, 1000));
        a.add_or_increment(&product(2, 2000));
        let mut b = a.clone();

        a.set_quantity(ProductId::new(1), 0);
        b.remove(ProductId::new(1));
        assert_eq!(a, b);

        a.set_quantity(ProductId::new(2), -3);
        assert!(a.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(1, 1000));
        let before = cart.clone();
        assert!(!cart.set_quantity(ProductId::new(42), 5));
        assert!(!cart.remove(ProductId::new(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(1, 1000));
        cart.set_quantity(ProductId::new(1), 3);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_is_linear() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(1, 25_000));
        let before = cart.total();

        cart.add_or_increment(&product(2, 1_000));
        cart.set_quantity(ProductId::new(2), 2);
        assert_eq!(cart.total().amount - before.amount, 2_000);
        assert_eq!(cart.try_total(), Ok(Money::vnd(27_000)));
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(1, 1000));
        assert!(cart.increment(ProductId::new(1)));
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));

        assert!(cart.decrement(ProductId::new(1)));
        assert!(cart.decrement(ProductId::new(1)));
        assert!(cart.is_empty());
        assert!(!cart.decrement(ProductId::new(1)));
    }

    #[test]
    fn test_try_total_overflow() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(1, i64::MAX));
        cart.set_quantity(ProductId::new(1), 2);
        assert_eq!(cart.try_total(), Err(CommerceError::Overflow));
        assert_eq!(cart.total(), Money::vnd(i64::MAX));
    }

    #[test]
    fn test_summary_lines() {
        let mut cart = Cart::new(Currency::VND);
        cart.add_or_increment(&product(1, 1000));
        cart.set_quantity(ProductId::new(1), 4);

        let summary = cart.summary();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].subtotal, Money::vnd(4000));
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total, Money::vnd(4000));
    }
}
