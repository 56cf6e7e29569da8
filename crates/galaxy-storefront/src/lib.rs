//! Session state for the TechGalaxy storefront.
//!
//! A [`Storefront`] owns the catalog, the cart, the signed-in identity and
//! every piece of view state for one browsing session. The presentation
//! layer calls its mutators in response to user events and renders from its
//! accessors or a [`Snapshot`]. Derived data (the listing, facets, cart
//! totals) is recomputed on every read.

mod checkout;
mod config;
mod error;
mod snapshot;
mod storefront;
mod view;

pub use checkout::Receipt;
pub use config::StoreConfig;
pub use error::StorefrontError;
pub use snapshot::Snapshot;
pub use storefront::Storefront;
pub use view::{Panels, View};
