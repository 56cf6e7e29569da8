//! Catalog, cart and product search for the TechGalaxy storefront.
//!
//! - **Catalog**: products, the append-only catalog store, seed data
//! - **Cart**: cart entries keyed by product, counts and totals
//! - **Search**: filter criteria, price brackets, sort orders, facets
//!
//! # Example
//!
//! ```rust
//! use galaxy_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let mut cart = Cart::new(catalog.currency());
//!
//! let criteria = FilterCriteria::new()
//!     .with_price(PriceBracket::From20MTo40M)
//!     .with_sort(SortOrder::PriceAsc);
//! let listing = search::apply(catalog.list(), &criteria);
//!
//! cart.add_or_increment(listing[0]);
//! println!("Total: {}", cart.total().display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductDraft, ProductSpecs};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartSummary, LineSummary};

    // Search
    pub use crate::search::{self, Facet, FilterCriteria, PriceBracket, SortOrder, ALL};
}
