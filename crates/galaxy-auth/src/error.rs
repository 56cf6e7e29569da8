//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
///
/// The form errors are shown inline under the auth form; the modal stays
/// open and no identity is set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login submitted without email or password.
    #[error("please enter your email and password")]
    MissingCredentials,

    /// Signup submitted with an empty field.
    #[error("please fill in all fields")]
    MissingFields,

    /// Signup password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Credentials rejected by a verifying provider.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    /// Check if this is a form validation failure (as opposed to a rejection).
    pub fn is_validation(&self) -> bool {
        !matches!(self, AuthError::InvalidCredentials)
    }
}
