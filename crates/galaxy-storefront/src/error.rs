//! Storefront error types.

use galaxy_auth::AuthError;
use galaxy_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced to the presentation layer.
///
/// Every variant is recoverable by correcting input; the storefront state is
/// unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl StorefrontError {
    /// Check if this error should be shown inline on a form.
    pub fn is_validation(&self) -> bool {
        match self {
            StorefrontError::Commerce(e) => e.is_validation(),
            StorefrontError::Auth(e) => e.is_validation(),
        }
    }
}
