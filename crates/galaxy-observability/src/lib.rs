//! Logging setup for the TechGalaxy storefront.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_subscriber`] once at startup to decide where they go.

mod logging;

pub use logging::*;
