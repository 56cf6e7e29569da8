//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
///
/// All of these are user-input or seed-data problems; none is fatal and a
/// failed operation never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two seed records share an identifier.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// A required form field was left empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Form prices must be positive; seed prices must not be negative.
    #[error("invalid price: {0}")]
    InvalidPrice(i64),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Unknown currency code.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Unknown price bracket name.
    #[error("unknown price bracket: {0} (expected all, lt20, 20-40 or gt40)")]
    UnknownPriceBracket(String),

    /// Unknown sort order name.
    #[error("unknown sort order: {0} (expected featured, price-asc, price-desc or name-asc)")]
    UnknownSortOrder(String),

    /// Every identifier up to `u64::MAX` is taken.
    #[error("no product identifiers left after {0}")]
    IdsExhausted(ProductId),

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Seed data could not be parsed.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Check if this error came from user input on a form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::MissingField(_)
                | CommerceError::InvalidPrice(_)
                | CommerceError::CurrencyMismatch { .. }
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
