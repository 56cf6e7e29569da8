//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency (whole dong for
//! VND, cents for USD), so no floating point ever touches a price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Vietnamese dong.
    #[default]
    VND,
    /// US dollar.
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{20ab}",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            Currency::USD => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "VND" => Some(Currency::VND),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Currency::VND => '.',
            Currency::USD => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Currency::VND => ',',
            Currency::USD => '.',
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CommerceError::UnknownCurrency(s.to_string()))
    }
}

/// A monetary value with currency.
///
/// Deserializes from either `{ amount, currency }` or a bare integer read as
/// dong. Seed files resolve bare prices against the catalog currency instead
/// (see [`crate::catalog::SeedPrice`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "MoneyRepr")]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Amount(i64),
    Full {
        amount: i64,
        #[serde(default)]
        currency: Currency,
    },
}

impl From<MoneyRepr> for Money {
    fn from(repr: MoneyRepr) -> Self {
        match repr {
            MoneyRepr::Amount(amount) => Money::vnd(amount),
            MoneyRepr::Full { amount, currency } => Money::new(amount, currency),
        }
    }
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shorthand for a dong amount.
    pub const fn vnd(amount: i64) -> Self {
        Self::new(amount, Currency::VND)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Add, saturating at the numeric bounds. Amounts are assumed to share a currency.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format for display in the currency's locale.
    ///
    /// ```
    /// use galaxy_commerce::money::Money;
    /// assert_eq!(Money::vnd(25_990_000).display(), "25.990.000\u{a0}\u{20ab}");
    /// ```
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        match self.currency {
            Currency::VND => format!("{}\u{a0}{}", amount, self.currency.symbol()),
            Currency::USD => match amount.strip_prefix('-') {
                Some(rest) => format!("-{}{}", self.currency.symbol(), rest),
                None => format!("{}{}", self.currency.symbol(), amount),
            },
        }
    }

    /// Format the number only, with locale grouping (e.g., "25.990.000").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let magnitude = self.amount.unsigned_abs();
        let whole = group_digits(magnitude / divisor, self.currency.group_separator());

        let mut out = String::new();
        if self.amount < 0 {
            out.push('-');
        }
        out.push_str(&whole);
        if places > 0 {
            out.push(self.currency.decimal_separator());
            out.push_str(&format!(
                "{:0width$}",
                magnitude % divisor,
                width = places as usize
            ));
        }
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
