//! Shopping cart module.
//!
//! Contains the cart model and its display summary.

mod cart;
mod summary;

pub use cart::{Cart, CartItem};
pub use summary::{CartSummary, LineSummary};
