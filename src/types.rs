//! Public type definitions for the ringlookup library.

use std::fmt;

/// A search result: one certificate from the keyring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    /// Primary key ID, 16 uppercase hex digits
    pub fingerprint: String,
    /// Identities bound to the key, in certificate order
    pub emails: Vec<String>,
}

impl User {
    /// Create a user record for a key ID with no identities attached.
    pub fn new(fingerprint: impl Into<String>) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            emails: Vec::new(),
        }
    }

    /// The first identity on the certificate, if any.
    pub fn primary_identity(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Whether `query` occurs in the key ID or any identity, ignoring case.
    pub(crate) fn is_match(&self, query: &str) -> bool {
        let query = query.to_uppercase();

        if self.fingerprint.to_uppercase().contains(&query) {
            return true;
        }

        self.emails
            .iter()
            .any(|email| email.to_uppercase().contains(&query))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fingerprint)?;
        if !self.emails.is_empty() {
            write!(f, " {}", self.emails.join(", "))?;
        }
        Ok(())
    }
}
