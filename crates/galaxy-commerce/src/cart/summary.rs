//! Cart summary for display.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of a cart as the cart panel renders it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-entry breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartSummary {
    /// Check if there is anything to check out.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total formatted for display.
    pub fn total_display(&self) -> String {
        self.total.display()
    }
}

/// One cart entry in a [`CartSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary {
            lines: vec![],
            item_count: 0,
            total: Money::vnd(0),
        };
        assert!(summary.is_empty());
        assert_eq!(summary.total_display(), "0\u{a0}\u{20ab}");
    }
}
