//! Session identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The "logged in" identity of the current browsing session.
///
/// Holds only the email that was entered; it is never persisted and is
/// dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionIdentity {
    email: String,
}

impl SessionIdentity {
    /// Create an identity for an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// The email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name shown in the header: the part of the email before `@`.
    pub fn display_name(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(local, _)| local)
            .filter(|local| !local.is_empty())
            .unwrap_or(self.email.as_str())
    }
}

impl fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(SessionIdentity::new("an@example.com").display_name(), "an");
        assert_eq!(SessionIdentity::new("no-at-sign").display_name(), "no-at-sign");
        assert_eq!(SessionIdentity::new("@example.com").display_name(), "@example.com");
    }

    #[test]
    fn test_identity_serializes_email() {
        let json = serde_json::to_string(&SessionIdentity::new("a@b.vn")).unwrap();
        assert_eq!(json, r#"{"email":"a@b.vn"}"#);
    }
}
