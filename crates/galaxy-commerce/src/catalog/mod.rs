//! Product catalog module.
//!
//! Contains the product model, the append-only catalog store and seed data.

mod product;
mod seed;
mod store;

pub use product::{Product, ProductDraft, ProductSpecs};
pub use seed::{builtin_products, SeedFile, SeedPrice, SeedProduct};
pub use store::Catalog;
