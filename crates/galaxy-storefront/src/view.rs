//! Primary view and overlay panels.

use galaxy_commerce::ProductId;
use serde::{Deserialize, Serialize};

/// What the main content area shows.
///
/// Exactly one is active: the listing or one product's detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "view", content = "product_id", rename_all = "lowercase")]
pub enum View {
    #[default]
    Listing,
    Detail(ProductId),
}

impl View {
    /// The product on the detail page, if any.
    pub fn selected(&self) -> Option<ProductId> {
        match self {
            View::Listing => None,
            View::Detail(id) => Some(*id),
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, View::Listing)
    }
}

/// Overlay panels drawn above the main view.
///
/// Each is toggled independently of the others and of [`View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Panels {
    /// Slide-over cart.
    pub cart: bool,
    /// Login/signup modal.
    pub auth: bool,
    /// Add-product modal.
    pub add_product: bool,
    /// Quick-view modal, showing this product.
    pub quick_view: Option<ProductId>,
}

impl Panels {
    /// Check if any panel is open.
    pub fn any_open(&self) -> bool {
        self.cart || self.auth || self.add_product || self.quick_view.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_listing() {
        assert!(View::default().is_listing());
        assert_eq!(View::default().selected(), None);
        assert_eq!(View::Detail(ProductId::new(2)).selected(), Some(ProductId::new(2)));
    }

    #[test]
    fn test_panels_start_closed() {
        assert!(!Panels::default().any_open());
    }

    #[test]
    fn test_view_serialization() {
        let json = serde_json::to_string(&View::Detail(ProductId::new(3))).unwrap();
        assert_eq!(json, r#"{"view":"detail","product_id":3}"#);
    }
}
