//! Identity providers.

use crate::{AuthError, LoginForm, SessionIdentity, SignupForm};

/// Turns submitted credentials into a session identity.
///
/// Implementations must leave no trace on failure; callers rely on an
/// `Err` meaning nothing changed.
pub trait IdentityProvider {
    /// Sign in with existing credentials.
    fn login(&self, form: &LoginForm) -> Result<SessionIdentity, AuthError>;

    /// Create an account and sign in.
    fn signup(&self, form: &SignupForm) -> Result<SessionIdentity, AuthError>;
}

/// Accepts any non-empty credential pair.
///
/// There are no stored accounts: login never checks the password and signup
/// never checks for an existing email. This is a demo stand-in, not a
/// security boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockIdentityProvider;

impl IdentityProvider for MockIdentityProvider {
    fn login(&self, form: &LoginForm) -> Result<SessionIdentity, AuthError> {
        form.validate()?;
        tracing::debug!(email = %form.email, "mock login accepted");
        Ok(SessionIdentity::new(form.email.clone()))
    }

    fn signup(&self, form: &SignupForm) -> Result<SessionIdentity, AuthError> {
        form.validate()?;
        tracing::debug!(email = %form.email, "mock signup accepted");
        Ok(SessionIdentity::new(form.email.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_login_accepts_any_password() {
        let provider = MockIdentityProvider;
        let identity = provider.login(&LoginForm::new("an@example.com", "x")).unwrap();
        assert_eq!(identity.email(), "an@example.com");
    }

    #[test]
    fn test_mock_signup_does_not_check_uniqueness() {
        let provider = MockIdentityProvider;
        let form = SignupForm::new("an@example.com", "pw", "pw");
        assert!(provider.signup(&form).is_ok());
        assert!(provider.signup(&form).is_ok());
    }

    #[test]
    fn test_mock_signup_rejects_mismatch() {
        let provider = MockIdentityProvider;
        let result = provider.signup(&SignupForm::new("an@example.com", "abc", "abd"));
        assert_eq!(result, Err(AuthError::PasswordMismatch));
    }
}
