//! Plain-data view of a storefront for rendering.

use galaxy_commerce::prelude::{CartSummary, Facet, FilterCriteria, Product};
use serde::Serialize;

use crate::{Panels, View};

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub store_name: String,
    pub view: View,
    pub panels: Panels,
    /// Signed-in email.
    pub identity: Option<String>,
    pub search: String,
    pub criteria: FilterCriteria,
    /// The filtered, sorted listing.
    pub listing: Vec<Product>,
    pub selected: Option<Product>,
    pub quick_view: Option<Product>,
    pub categories: Facet,
    pub brands: Facet,
    pub cart: CartSummary,
    /// Inline error for whichever form is open.
    pub form_error: Option<String>,
}
