//! Authentication module for the TechGalaxy storefront.
//!
//! Sign-in here is a mock: credentials are checked for presence (and, on
//! signup, for matching confirmation) but never verified against stored
//! accounts. The [`IdentityProvider`] trait is the seam where a real
//! implementation would plug in.

mod credentials;
mod error;
mod identity;
mod provider;

pub use credentials::{AuthMode, LoginForm, SignupForm};
pub use error::AuthError;
pub use identity::SessionIdentity;
pub use provider::{IdentityProvider, MockIdentityProvider};
