//! Simulated checkout.

use std::fmt;

use chrono::{DateTime, Utc};
use galaxy_commerce::prelude::CartSummary;
use galaxy_commerce::Money;
use serde::{Deserialize, Serialize};

/// Confirmation of a simulated order.
///
/// Nothing is charged or persisted; the receipt is the whole outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// The cart as it was when checked out.
    pub summary: CartSummary,
    /// Signed-in email, if any.
    pub customer: Option<String>,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    pub(crate) fn new(summary: CartSummary, customer: Option<String>) -> Self {
        Self {
            summary,
            customer,
            placed_at: Utc::now(),
        }
    }

    pub fn total(&self) -> Money {
        self.summary.total
    }

    pub fn item_count(&self) -> i64 {
        self.summary.item_count
    }

    /// The confirmation message shown to the shopper.
    pub fn message(&self) -> String {
        format!(
            "Thank you for your order! Total: {} ({} items). This is a simulated checkout.",
            self.summary.total.display(),
            self.summary.item_count
        )
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
