//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Hardware specification sheet shown on the product detail view.
///
/// All fields are free text; an empty string means "not listed".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductSpecs {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub display: String,
    pub gpu: String,
}

impl ProductSpecs {
    /// Label/value pairs in display order, skipping unlisted entries.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("CPU", self.cpu.as_str()),
            ("RAM", self.ram.as_str()),
            ("Storage", self.storage.as_str()),
            ("Display", self.display.as_str()),
            ("GPU", self.gpu.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

/// A product in the catalog.
///
/// Products are immutable once stored; the catalog owns them and everything
/// else (cart entries, the selected product) holds copies or identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Manufacturer.
    pub brand: String,
    /// Unit price.
    pub price: Money,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Image reference (URL or asset path).
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    /// Category name.
    pub category: String,
    /// Specification sheet.
    #[serde(default)]
    pub specs: ProductSpecs,
}

impl Product {
    /// Build a product from a draft and its assigned identifier.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            brand: draft.brand,
            price: draft.price,
            description: draft.description,
            image_url: draft.image_url,
            category: draft.category,
            specs: draft.specs,
        }
    }

    /// Price formatted for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

/// A product that has not been assigned an identifier yet.
///
/// This is what the add-product form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub specs: ProductSpecs,
}

impl ProductDraft {
    /// Create a draft with the required fields.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
            category: category.into(),
            image_url: image_url.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the specification sheet.
    pub fn with_specs(mut self, specs: ProductSpecs) -> Self {
        self.specs = specs;
        self
    }

    /// Check the add-product form rules.
    ///
    /// Name, brand, category and image are required and the price must be
    /// positive. Description and specs are optional.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            ("name", &self.name),
            ("brand", &self.brand),
            ("category", &self.category),
            ("image_url", &self.image_url),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CommerceError::MissingField(*field));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::InvalidPrice(self.price.amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new(
            "ROG Zephyrus G14",
            "ASUS",
            Money::vnd(45_990_000),
            "Laptop",
            "/img/g14.png",
        )
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_missing_field() {
        let mut d = draft();
        d.brand = "   ".to_string();
        assert_eq!(d.validate(), Err(CommerceError::MissingField("brand")));
    }

    #[test]
    fn test_non_positive_price() {
        let mut d = draft();
        d.price = Money::vnd(0);
        assert_eq!(d.validate(), Err(CommerceError::InvalidPrice(0)));
        d.price = Money::vnd(-5);
        assert_eq!(d.validate(), Err(CommerceError::InvalidPrice(-5)));
    }

    #[test]
    fn test_description_optional() {
        let d = draft().with_description("");
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_spec_entries_skip_empty() {
        let specs = ProductSpecs {
            cpu: "Ryzen 9".to_string(),
            gpu: "RTX 4070".to_string(),
            ..ProductSpecs::default()
        };
        assert_eq!(specs.entries(), vec![("CPU", "Ryzen 9"), ("GPU", "RTX 4070")]);
    }
}
